//! Terminal presentation for the fetch command.

mod progress;
mod summary;

pub use progress::SnapshotProgressPrinter;
pub use summary::format_summary;
