//! Core domain types and port definitions for hfsnap.
//!
//! This crate owns the vocabulary shared by the adapters: the access token and
//! its loader, the snapshot request/report DTOs, and the
//! [`SnapshotFetcherPort`] trait implemented by `hfsnap-hf`.

#![deny(unused_crate_dependencies)]

pub mod credentials;
pub mod ports;
pub mod snapshot;

// Re-export commonly used types for convenience
pub use credentials::{AccessToken, CredentialsError, DEFAULT_TOKEN_FILE, load_access_token};
pub use ports::SnapshotFetcherPort;
#[cfg(any(test, feature = "test-utils"))]
pub use ports::MockSnapshotFetcherPort;
pub use snapshot::{
    DEFAULT_LOCAL_DIR, DEFAULT_REPO_ID, DEFAULT_REPO_KIND, DEFAULT_REVISION, ParseRepoKindError,
    RepoKind, SnapshotError, SnapshotReport, SnapshotRequest, SnapshotResult,
};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio as _;
