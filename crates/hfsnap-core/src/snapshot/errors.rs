//! Snapshot error types.
//!
//! These are the domain-level failures a snapshot fetch can surface.
//! Implementation-specific errors (HTTP, JSON) are mapped to these by the
//! adapter.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from snapshot operations.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The token was rejected or the repository requires one.
    #[error("Authentication failed for repository '{repo_id}'")]
    AuthFailed {
        /// Repository that refused access
        repo_id: String,
    },

    /// The repository, revision or a listed file does not exist.
    #[error("Not found: {what}")]
    NotFound {
        /// What was not found
        what: String,
    },

    /// Network or HTTP-level failure.
    #[error("Network error: {message}")]
    Network {
        /// Description of the failure
        message: String,
        /// HTTP status code if one was received
        status: Option<u16>,
    },

    /// The hub answered with something that could not be used.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Writing the snapshot to local disk failed.
    #[error("I/O error at {}: {message}", path.display())]
    Io {
        /// Path being written
        path: PathBuf,
        /// Underlying error message
        message: String,
    },

    /// The client was misconfigured (bad endpoint, bad header value).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

impl SnapshotError {
    /// Build an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;
