//! Internal error types for Hugging Face operations.
//!
//! These errors are internal to `hfsnap-hf` and are mapped to
//! [`hfsnap_core::SnapshotError`] at the port boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Hugging Face operations.
pub type HfResult<T> = Result<T, HfError>;

/// Errors related to Hugging Face API operations.
#[derive(Debug, Error)]
pub enum HfError {
    /// The hub rejected the credentials (401/403).
    #[error("HuggingFace rejected the access token ({status}): {url}")]
    Unauthorized {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The repository, revision or file does not exist (404).
    #[error("Not found on HuggingFace: {url}")]
    NotFound {
        /// The URL that was requested
        url: String,
    },

    /// API request failed with any other HTTP error status.
    #[error("HuggingFace API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from HuggingFace API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// The token cannot be sent as an HTTP header value.
    #[error("Access token is not a valid HTTP header value")]
    InvalidToken,

    /// Writing a downloaded file failed.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// Destination path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl HfError {
    /// Classify an HTTP failure status.
    pub(crate) fn from_status(status: u16, url: &str) -> Self {
        match status {
            401 | 403 => Self::Unauthorized {
                status,
                url: url.to_string(),
            },
            404 => Self::NotFound {
                url: url.to_string(),
            },
            _ => Self::ApiRequestFailed {
                status,
                url: url.to_string(),
            },
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
