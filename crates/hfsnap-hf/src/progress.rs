//! Snapshot progress events and throttling.
//!
//! The client reports what it is doing through an optional callback. Byte
//! counts are rate-limited so terminals are not flooded with redraws.

use std::sync::Arc;
use std::time::{Duration, Instant};

/// Progress of a running snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotProgress {
    /// The file listing was resolved.
    Planned {
        /// Commit the snapshot is pinned to
        commit: String,
        /// Number of files that will be written
        total_files: usize,
    },
    /// A file download began.
    FileStarted {
        /// Zero-based position in the listing
        index: usize,
        /// Repository-relative path
        path: String,
    },
    /// Bytes written so far for the current file.
    Bytes {
        /// Repository-relative path
        path: String,
        /// Bytes written so far
        downloaded: u64,
        /// Content length if known
        total: Option<u64>,
    },
    /// A file was written completely.
    FileFinished {
        /// Repository-relative path
        path: String,
        /// Bytes written
        bytes: u64,
    },
}

/// Callback receiving [`SnapshotProgress`] events.
pub type ProgressCallback = Arc<dyn Fn(&SnapshotProgress) + Send + Sync>;

/// Rate-limiter for progress updates.
///
/// Ensures progress events are not emitted more frequently than the
/// configured interval.
pub struct ProgressThrottle {
    last_emit: Option<Instant>,
    min_interval: Duration,
}

impl ProgressThrottle {
    /// Create a new throttle with the specified minimum interval.
    pub const fn new(min_interval: Duration) -> Self {
        Self {
            last_emit: None,
            min_interval,
        }
    }

    /// Create a throttle with a default interval of 100ms.
    pub const fn default_interval() -> Self {
        Self::new(Duration::from_millis(100))
    }

    /// Check if enough time has passed to emit another progress update.
    pub fn should_emit(&mut self) -> bool {
        let now = Instant::now();
        match self.last_emit {
            Some(last) if now.duration_since(last) < self.min_interval => false,
            _ => {
                self.last_emit = Some(now);
                true
            }
        }
    }
}

impl Default for ProgressThrottle {
    fn default() -> Self {
        Self::default_interval()
    }
}
