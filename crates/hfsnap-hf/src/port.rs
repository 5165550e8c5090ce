//! Port trait implementation for `HfClient`.
//!
//! This module implements the core-owned `SnapshotFetcherPort` trait for
//! `HfClient`, converting internal errors into core errors.

use async_trait::async_trait;
use hfsnap_core::{
    SnapshotError, SnapshotFetcherPort, SnapshotReport, SnapshotRequest, SnapshotResult,
};

use crate::client::HfClient;
use crate::error::HfError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `HfError` to core `SnapshotError`.
fn map_error(err: HfError, repo_id: &str) -> SnapshotError {
    match err {
        HfError::Unauthorized { .. } => SnapshotError::AuthFailed {
            repo_id: repo_id.to_string(),
        },
        HfError::NotFound { url } => SnapshotError::NotFound { what: url },
        HfError::ApiRequestFailed { status, url } => SnapshotError::Network {
            message: format!("request failed with status {status}: {url}"),
            status: Some(status),
        },
        HfError::InvalidResponse { message } => SnapshotError::InvalidResponse { message },
        HfError::InvalidToken => SnapshotError::Configuration {
            message: "access token is not a valid HTTP header value".to_string(),
        },
        HfError::Io { path, source } => SnapshotError::io(path, &source),
        HfError::Network(e) => SnapshotError::Network {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        },
        HfError::InvalidUrl(e) => SnapshotError::Configuration {
            message: e.to_string(),
        },
        HfError::JsonParse(e) => SnapshotError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> SnapshotFetcherPort for HfClient<B> {
    async fn fetch_snapshot(&self, request: &SnapshotRequest) -> SnapshotResult<SnapshotReport> {
        self.snapshot(request)
            .await
            .map_err(|e| map_error(e, &request.repo_id))
    }
}
