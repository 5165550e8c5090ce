//! CLI-specific error types and mappings.
//!
//! Maps credential and snapshot failures to exit codes and user-facing
//! messages.

use hfsnap_core::{CredentialsError, SnapshotError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the credentials file failed.
    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    /// The hub refused the token.
    #[error("{0}")]
    Auth(String),

    /// Remote failure (not found, network, bad response).
    #[error("{0}")]
    Remote(String),

    /// Writing the snapshot to disk failed.
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Remote(_) => 1,
            Self::Credentials(_) | Self::Io(_) => 74, // EX_IOERR
            Self::Auth(_) => 77,                      // EX_NOPERM
            Self::Config(_) => 78,                    // EX_CONFIG
        }
    }
}

impl From<SnapshotError> for CliError {
    fn from(err: SnapshotError) -> Self {
        let message = err.to_string();
        match err {
            SnapshotError::AuthFailed { .. } => Self::Auth(message),
            SnapshotError::NotFound { .. }
            | SnapshotError::Network { .. }
            | SnapshotError::InvalidResponse { .. } => Self::Remote(message),
            SnapshotError::Io { .. } => Self::Io(message),
            SnapshotError::Configuration { message } => Self::Config(message),
        }
    }
}
