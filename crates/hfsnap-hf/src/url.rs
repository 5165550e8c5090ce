//! URL construction helpers for the Hugging Face Hub.
//!
//! Pure functions, so every request of a snapshot is built the same way.

use url::Url;

use crate::error::HfResult;
use crate::models::{HfConfig, HfRepoRef};

/// Endpoint base as a string without a trailing slash.
fn endpoint_base(config: &HfConfig) -> &str {
    config.endpoint.as_str().trim_end_matches('/')
}

/// Percent-encode each `/`-separated segment of a repository file path.
pub fn encode_file_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Build the URL of the repository info endpoint for a revision.
///
/// The revision is encoded as a single segment, so `refs/pr/1` stays one
/// path component.
pub fn build_revision_info_url(
    config: &HfConfig,
    repo: &HfRepoRef,
    revision: &str,
) -> HfResult<Url> {
    let url = format!(
        "{}/api/{}/{}/revision/{}",
        endpoint_base(config),
        repo.kind.api_segment(),
        repo.id,
        urlencoding::encode(revision),
    );
    Ok(Url::parse(&url)?)
}

/// Build the URL for downloading one file of a repository at a commit.
pub fn build_resolve_url(
    config: &HfConfig,
    repo: &HfRepoRef,
    commit: &str,
    file_path: &str,
) -> HfResult<Url> {
    let url = format!(
        "{}/{}{}/resolve/{}/{}",
        endpoint_base(config),
        repo.kind.url_prefix(),
        repo.id,
        urlencoding::encode(commit),
        encode_file_path(file_path),
    );
    Ok(Url::parse(&url)?)
}
