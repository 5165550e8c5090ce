//! Public configuration for the Hugging Face client.
//!
//! This module provides a stable public API for configuring the HF client.
//! The internal config is derived from this.

use std::time::Duration;

/// Default hub endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://huggingface.co";

/// Environment variable that overrides the hub endpoint.
pub const ENDPOINT_ENV: &str = "HF_ENDPOINT";

/// Configuration for the Hugging Face client.
///
/// # Example
///
/// ```
/// use hfsnap_hf::HfClientConfig;
/// use std::time::Duration;
///
/// let config = HfClientConfig::new()
///     .with_endpoint("https://hub.internal")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct HfClientConfig {
    /// Hub endpoint (scheme + host, optionally a path prefix)
    pub(crate) endpoint: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Per-request timeout. `None` lets large files take as long as they need.
    pub(crate) timeout: Option<Duration>,
}

impl Default for HfClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: concat!("hfsnap/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl HfClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with the endpoint taken from `HF_ENDPOINT` when set.
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(ENDPOINT_ENV) {
            Ok(endpoint) if !endpoint.trim().is_empty() => config.with_endpoint(endpoint.trim()),
            _ => config,
        }
    }

    /// Set the hub endpoint.
    ///
    /// Defaults to `https://huggingface.co`.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The configured endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The configured request timeout, if any.
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
