//! Access token loading.
//!
//! The credentials file is read once, in full, and its contents are used as
//! the token without any normalization. Trailing whitespace and newlines are
//! part of the returned value.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default location of the credentials file, relative to the working directory.
pub const DEFAULT_TOKEN_FILE: &str = ".access";

/// Errors raised while reading the credentials file.
#[derive(Debug, Error)]
pub enum CredentialsError {
    /// The credentials file does not exist.
    #[error("Credentials file not found: {}", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The file exists but could not be read as text.
    #[error("Failed to read credentials file {}: {source}", path.display())]
    Read {
        /// Path of the credentials file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
}

/// An access token for the remote hub.
///
/// Holds the exact bytes of the credentials file. `Debug` never prints the
/// secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The token exactly as it was loaded.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"<redacted>").finish()
    }
}

/// Read the whole credentials file at `path` and return it as the token.
pub fn load_access_token(path: impl AsRef<Path>) -> Result<AccessToken, CredentialsError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            CredentialsError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            CredentialsError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    tracing::debug!(path = %path.display(), bytes = raw.len(), "Loaded access token");
    Ok(AccessToken(raw))
}
