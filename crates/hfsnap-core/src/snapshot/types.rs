//! Snapshot request and report DTOs.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::credentials::AccessToken;

/// Dataset fetched when no repository is given.
pub const DEFAULT_REPO_ID: &str = "wyzelabs/RuleRecommendation";

/// Repository kind fetched when none is given.
pub const DEFAULT_REPO_KIND: RepoKind = RepoKind::Dataset;

/// Destination directory used when none is given.
pub const DEFAULT_LOCAL_DIR: &str = "data/";

/// Revision resolved when none is given.
pub const DEFAULT_REVISION: &str = "main";

// ============================================================================
// Repository Kind
// ============================================================================

/// Kind of hub repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepoKind {
    /// Model repository
    Model,
    /// Dataset repository
    Dataset,
    /// Space repository
    Space,
}

impl RepoKind {
    /// Wire name of the kind (`model`, `dataset`, `space`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Dataset => "dataset",
            Self::Space => "space",
        }
    }

    /// Path segment used by the metadata API (`/api/{segment}/...`).
    pub const fn api_segment(self) -> &'static str {
        match self {
            Self::Model => "models",
            Self::Dataset => "datasets",
            Self::Space => "spaces",
        }
    }

    /// Prefix used in file resolve URLs. Models have none.
    pub const fn url_prefix(self) -> &'static str {
        match self {
            Self::Model => "",
            Self::Dataset => "datasets/",
            Self::Space => "spaces/",
        }
    }
}

impl fmt::Display for RepoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a repository kind string is not recognized.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown repository type '{0}' (expected model, dataset or space)")]
pub struct ParseRepoKindError(pub String);

impl FromStr for RepoKind {
    type Err = ParseRepoKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "model" | "models" => Ok(Self::Model),
            "dataset" | "datasets" => Ok(Self::Dataset),
            "space" | "spaces" => Ok(Self::Space),
            _ => Err(ParseRepoKindError(s.to_string())),
        }
    }
}

// ============================================================================
// Request / Report
// ============================================================================

/// Request to materialize a repository snapshot locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRequest {
    /// Namespaced repository ID (e.g., `wyzelabs/RuleRecommendation`).
    pub repo_id: String,
    /// Kind of repository.
    pub kind: RepoKind,
    /// Directory the snapshot files are written into.
    pub local_dir: PathBuf,
    /// Access token, passed through untouched.
    pub token: Option<AccessToken>,
    /// Branch, tag or commit to resolve.
    pub revision: String,
}

impl SnapshotRequest {
    /// Create a request for `repo_id` of the given kind, written to `local_dir`.
    pub fn new(repo_id: impl Into<String>, kind: RepoKind, local_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_id: repo_id.into(),
            kind,
            local_dir: local_dir.into(),
            token: None,
            revision: DEFAULT_REVISION.to_string(),
        }
    }

    /// Set the access token.
    #[must_use]
    pub fn with_token(mut self, token: AccessToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Set the revision to resolve.
    #[must_use]
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = revision.into();
        self
    }
}

impl Default for SnapshotRequest {
    fn default() -> Self {
        Self::new(DEFAULT_REPO_ID, DEFAULT_REPO_KIND, DEFAULT_LOCAL_DIR)
    }
}

/// Outcome of a completed snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotReport {
    /// Repository that was fetched.
    pub repo_id: String,
    /// Commit the revision resolved to.
    pub commit_sha: String,
    /// Directory holding the snapshot.
    pub local_dir: PathBuf,
    /// Files written, relative to `local_dir`, in listing order.
    pub files: Vec<String>,
    /// Total bytes written.
    pub total_bytes: u64,
}
