//! `hfsnap` command-line adapter.
//!
//! Loads the access token, wires the hub client and hands the request to the
//! snapshot fetcher. Every failure ends the process with a mapped exit code.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by the binary target
use dotenvy as _;
use tokio as _;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tempfile as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::build_fetcher;
pub use error::CliError;
pub use parser::Cli;
