//! Hugging Face client for materializing repository snapshots.
//!
//! This module provides the main client interface for interacting with
//! the Hugging Face Hub API.

mod snapshot;

use hfsnap_core::{SnapshotError, SnapshotResult};
use url::Url;

use crate::config::HfClientConfig;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::HfConfig;
use crate::progress::{ProgressCallback, SnapshotProgress};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Hugging Face client using the reqwest HTTP backend.
pub type DefaultHfClient = HfClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for interacting with the Hugging Face Hub API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultHfClient` for production code.
pub struct HfClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: HfConfig,
    pub(crate) progress: Option<ProgressCallback>,
}

impl DefaultHfClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &HfClientConfig) -> SnapshotResult<Self> {
        let internal_config = Self::to_internal_config(config)?;
        let backend = ReqwestBackend::new(config).map_err(|e| SnapshotError::Configuration {
            message: e.to_string(),
        })?;

        Ok(Self {
            backend,
            config: internal_config,
            progress: None,
        })
    }

    fn to_internal_config(config: &HfClientConfig) -> SnapshotResult<HfConfig> {
        let endpoint = Url::parse(config.endpoint.trim_end_matches('/')).map_err(|e| {
            SnapshotError::Configuration {
                message: format!("invalid hub endpoint '{}': {e}", config.endpoint),
            }
        })?;

        Ok(HfConfig { endpoint })
    }
}

impl<B: HttpBackend> HfClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: HfConfig, backend: B) -> Self {
        Self {
            backend,
            config,
            progress: None,
        }
    }

    /// Report snapshot progress to `callback`.
    #[must_use]
    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.progress = Some(callback);
        self
    }

    pub(crate) fn emit(&self, event: &SnapshotProgress) {
        if let Some(ref callback) = self.progress {
            callback(event);
        }
    }
}
