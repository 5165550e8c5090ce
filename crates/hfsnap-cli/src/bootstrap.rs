//! Composition root: builds the snapshot fetcher used by handlers.

use std::sync::Arc;
use std::time::Duration;

use hfsnap_core::SnapshotFetcherPort;
use hfsnap_hf::{DefaultHfClient, HfClientConfig, ProgressCallback};

use crate::error::CliError;

/// Client configuration: endpoint from `HF_ENDPOINT`, plus an optional timeout.
fn client_config(timeout: Option<Duration>) -> HfClientConfig {
    let config = HfClientConfig::from_env();
    match timeout {
        Some(timeout) => config.with_timeout(timeout),
        None => config,
    }
}

/// Build the hub client wired to `progress`.
pub fn build_fetcher(
    progress: Option<ProgressCallback>,
    timeout: Option<Duration>,
) -> Result<Arc<dyn SnapshotFetcherPort>, CliError> {
    let config = client_config(timeout);
    tracing::debug!(
        endpoint = config.endpoint(),
        timeout = ?config.timeout(),
        "Using hub endpoint"
    );

    let mut client = DefaultHfClient::new(&config)?;
    if let Some(callback) = progress {
        client = client.with_progress(callback);
    }
    Ok(Arc::new(client))
}
