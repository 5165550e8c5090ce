//! HTTP backend abstraction for the Hugging Face Hub.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest. Requests are made exactly once; there is no retry.

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::StreamExt;
use futures_util::stream::BoxStream;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::HfClientConfig;
use crate::error::{HfError, HfResult};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// A streamed response body.
pub struct ByteStream {
    /// `Content-Length`, when the server sent one
    pub content_length: Option<u64>,
    /// Body chunks
    pub body: BoxStream<'static, HfResult<Bytes>>,
}

/// Trait for HTTP backends that talk to the hub.
///
/// This is an implementation detail - external code should use the
/// `SnapshotFetcherPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        token: Option<&str>,
    ) -> HfResult<T>;

    /// Start a GET request and hand back the body as a stream.
    async fn get_stream(&self, url: &Url, token: Option<&str>) -> HfResult<ByteStream>;
}

/// Build the `Authorization` header for a raw token.
///
/// Header values cannot carry line terminators, so trailing CR/LF from the
/// credentials file is dropped here and only here. An empty token means an
/// anonymous request.
pub fn bearer_header(token: &str) -> HfResult<Option<HeaderValue>> {
    let token = token.trim_end_matches(['\r', '\n']);
    if token.is_empty() {
        return Ok(None);
    }

    let mut value =
        HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| HfError::InvalidToken)?;
    value.set_sensitive(true);
    Ok(Some(value))
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &HfClientConfig) -> HfResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Send a GET request and fail on any non-success status.
    async fn send(&self, url: &Url, token: Option<&str>) -> HfResult<reqwest::Response> {
        let mut request = self.client.get(url.as_str());
        if let Some(header) = token.map(bearer_header).transpose()?.flatten() {
            request = request.header(AUTHORIZATION, header);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            tracing::debug!(status = status.as_u16(), %url, "Hub request failed");
            Err(HfError::from_status(status.as_u16(), url.as_str()))
        }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        token: Option<&str>,
    ) -> HfResult<T> {
        let response = self.send(url, token).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn get_stream(&self, url: &Url, token: Option<&str>) -> HfResult<ByteStream> {
        let response = self.send(url, token).await?;
        let content_length = response.content_length();
        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(HfError::from))
            .boxed();

        Ok(ByteStream {
            content_length,
            body,
        })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
