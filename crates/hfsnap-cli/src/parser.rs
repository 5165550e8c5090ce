//! Main CLI parser.
//!
//! With no arguments the tool fetches the `wyzelabs/RuleRecommendation`
//! dataset into `data/` using the token stored in `.access`.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use hfsnap_core::{
    DEFAULT_LOCAL_DIR, DEFAULT_REPO_ID, DEFAULT_REVISION, DEFAULT_TOKEN_FILE, RepoKind,
    SnapshotRequest,
};

/// Download a full Hugging Face repository snapshot into a local directory.
#[derive(Debug, Parser)]
#[command(name = "hfsnap")]
#[command(about = "Download a Hugging Face repository snapshot")]
#[command(version)]
pub struct Cli {
    /// Repository to fetch (owner/name)
    #[arg(long = "repo-id", env = "HFSNAP_REPO_ID", default_value = DEFAULT_REPO_ID)]
    pub repo_id: String,

    /// Repository kind: model, dataset or space
    #[arg(long = "repo-type", env = "HFSNAP_REPO_TYPE", default_value = "dataset")]
    pub repo_type: RepoKind,

    /// Directory the snapshot is written into
    #[arg(long = "local-dir", env = "HFSNAP_LOCAL_DIR", default_value = DEFAULT_LOCAL_DIR)]
    pub local_dir: PathBuf,

    /// File whose entire contents are used as the access token
    #[arg(long = "token-file", env = "HFSNAP_TOKEN_FILE", default_value = DEFAULT_TOKEN_FILE)]
    pub token_file: PathBuf,

    /// Branch, tag or commit to fetch
    #[arg(long = "revision", env = "HFSNAP_REVISION", default_value = DEFAULT_REVISION)]
    pub revision: String,

    /// Per-request timeout in seconds (no timeout when unset)
    #[arg(
        long = "timeout-secs",
        env = "HFSNAP_TIMEOUT_SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: Option<u64>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// The snapshot request these arguments describe, without a token.
    pub fn snapshot_request(&self) -> SnapshotRequest {
        SnapshotRequest::new(self.repo_id.clone(), self.repo_type, self.local_dir.clone())
            .with_revision(self.revision.clone())
    }

    /// Request timeout for the hub client.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_fixed_target() {
        let cli = Cli::try_parse_from(["hfsnap"]).unwrap();
        assert_eq!(cli.repo_id, "wyzelabs/RuleRecommendation");
        assert_eq!(cli.repo_type, RepoKind::Dataset);
        assert_eq!(cli.local_dir, PathBuf::from("data/"));
        assert_eq!(cli.token_file, PathBuf::from(".access"));
        assert_eq!(cli.snapshot_request().revision, "main");
        assert!(cli.request_timeout().is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "hfsnap",
            "--repo-id",
            "gpt2",
            "--repo-type",
            "model",
            "--local-dir",
            "/tmp/out",
            "--token-file",
            "secrets/hf",
            "--revision",
            "refs/pr/1",
            "--timeout-secs",
            "30",
            "-v",
        ])
        .unwrap();

        let request = cli.snapshot_request();
        assert_eq!(request.repo_id, "gpt2");
        assert_eq!(request.kind, RepoKind::Model);
        assert_eq!(request.local_dir, PathBuf::from("/tmp/out"));
        assert_eq!(request.revision, "refs/pr/1");
        assert_eq!(cli.request_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(cli.token_file, PathBuf::from("secrets/hf"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_unknown_repo_type_rejected() {
        let result = Cli::try_parse_from(["hfsnap", "--repo-type", "bucket"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = Cli::try_parse_from(["hfsnap", "--timeout-secs", "0"]);
        assert!(result.is_err());
    }
}
