//! Snapshot fetcher port trait.

use async_trait::async_trait;

use crate::snapshot::{SnapshotReport, SnapshotRequest, SnapshotResult};

/// Port trait for materializing a remote repository snapshot on local disk.
///
/// The implementation owns the network protocol, the authentication scheme
/// and the on-disk layout. Callers hand over the request and get back either
/// the report or the first failure.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait SnapshotFetcherPort: Send + Sync {
    /// Download every file of `request.repo_id` at `request.revision` into
    /// `request.local_dir`.
    async fn fetch_snapshot(&self, request: &SnapshotRequest) -> SnapshotResult<SnapshotReport>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{RepoKind, SnapshotError};
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn SnapshotFetcherPort>) {}

    #[tokio::test]
    async fn test_mock_propagates_error() {
        let mut mock = MockSnapshotFetcherPort::new();
        mock.expect_fetch_snapshot().times(1).returning(|req| {
            Err(SnapshotError::NotFound {
                what: req.repo_id.clone(),
            })
        });

        let request = SnapshotRequest::new("org/missing", RepoKind::Dataset, "data/");
        let err = mock.fetch_snapshot(&request).await.unwrap_err();

        assert!(matches!(err, SnapshotError::NotFound { what } if what == "org/missing"));
    }
}
