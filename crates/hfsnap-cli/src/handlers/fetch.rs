//! Fetch handler.
//!
//! Loads the access token, then hands the snapshot request to the fetcher.
//! The token is read to completion before any network activity starts.

use std::path::Path;

use hfsnap_core::{SnapshotFetcherPort, SnapshotReport, SnapshotRequest, load_access_token};

use crate::error::CliError;

/// Execute the fetch command.
///
/// `request` carries the repository, kind and destination; its token is
/// replaced by the contents of `token_file`.
pub async fn execute(
    fetcher: &dyn SnapshotFetcherPort,
    request: SnapshotRequest,
    token_file: &Path,
) -> Result<SnapshotReport, CliError> {
    let token = load_access_token(token_file)?;
    let request = request.with_token(token);

    tracing::info!(
        repo = %request.repo_id,
        kind = %request.kind,
        local_dir = %request.local_dir.display(),
        "Fetching snapshot"
    );
    Ok(fetcher.fetch_snapshot(&request).await?)
}
