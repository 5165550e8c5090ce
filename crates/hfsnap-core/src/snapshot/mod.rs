//! Snapshot domain types.
//!
//! A snapshot is the complete set of files of a remote repository at one
//! revision, materialized into a local directory.

mod errors;
mod types;

pub use errors::{SnapshotError, SnapshotResult};
pub use types::{
    DEFAULT_LOCAL_DIR, DEFAULT_REPO_ID, DEFAULT_REPO_KIND, DEFAULT_REVISION, ParseRepoKindError,
    RepoKind, SnapshotReport, SnapshotRequest,
};
