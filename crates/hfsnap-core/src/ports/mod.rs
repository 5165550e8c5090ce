//! Port definitions.
//!
//! Adapters implement these traits; the CLI only ever talks to the traits.

mod snapshot;

#[cfg(any(test, feature = "test-utils"))]
pub use snapshot::MockSnapshotFetcherPort;
pub use snapshot::SnapshotFetcherPort;
