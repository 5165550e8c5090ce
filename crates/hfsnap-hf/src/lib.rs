//! Hugging Face Hub snapshot client.
//!
//! Implements [`hfsnap_core::SnapshotFetcherPort`] on top of the hub's HTTP
//! API: one metadata request to resolve the revision and list the files, then
//! one streamed download per file into the destination directory.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultHfClient is meant to be used through the SnapshotFetcherPort trait,
// not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod progress;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultHfClient;

// Configuration
pub use config::{DEFAULT_ENDPOINT, ENDPOINT_ENV, HfClientConfig};

// Progress reporting
pub use progress::{ProgressCallback, ProgressThrottle, SnapshotProgress};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tempfile as _;
