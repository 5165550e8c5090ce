//! CLI progress rendering for snapshot downloads.
//!
//! Presentation-only: turns [`SnapshotProgress`] events into an indicatif bar
//! on terminals and into log lines everywhere else.

use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use hfsnap_hf::{ProgressCallback, SnapshotProgress};
use indicatif::{HumanBytes, ProgressBar, ProgressDrawTarget, ProgressStyle};

const MAX_LABEL: usize = 40;

/// Progress display that automatically selects terminal or plain output.
pub struct SnapshotProgressPrinter {
    bar: Option<ProgressBar>,
    total_files: AtomicUsize,
}

impl SnapshotProgressPrinter {
    /// Create a new printer, auto-detecting terminal capability on stderr.
    pub fn new() -> Self {
        let bar = io::stderr().is_terminal().then(|| {
            let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
            bar.set_style(spinner_style());
            bar.set_message("Resolving snapshot".to_string());
            bar.enable_steady_tick(Duration::from_millis(120));
            bar
        });

        Self {
            bar,
            total_files: AtomicUsize::new(0),
        }
    }

    /// Printer that only logs, regardless of the terminal.
    pub const fn plain() -> Self {
        Self {
            bar: None,
            total_files: AtomicUsize::new(0),
        }
    }

    /// Wrap the printer into a callback for the hub client.
    pub fn callback(self: &Arc<Self>) -> ProgressCallback {
        let printer = Arc::clone(self);
        Arc::new(move |event: &SnapshotProgress| printer.handle(event))
    }

    /// Render one event.
    pub fn handle(&self, event: &SnapshotProgress) {
        match event {
            SnapshotProgress::Planned {
                commit,
                total_files,
            } => {
                self.total_files.store(*total_files, Ordering::Relaxed);
                tracing::info!(%commit, files = total_files, "Downloading snapshot");
            }
            SnapshotProgress::FileStarted { index, path } => {
                let message = self.file_message(*index, path);
                if let Some(ref bar) = self.bar {
                    bar.set_style(spinner_style());
                    bar.set_length(0);
                    bar.set_position(0);
                    bar.set_message(message);
                } else {
                    tracing::debug!("{message}");
                }
            }
            SnapshotProgress::Bytes {
                downloaded, total, ..
            } => {
                if let Some(ref bar) = self.bar {
                    if let Some(total) = *total {
                        if bar.length() != Some(total) {
                            bar.set_style(bar_style());
                            bar.set_length(total);
                        }
                    }
                    bar.set_position(*downloaded);
                }
            }
            SnapshotProgress::FileFinished { path, bytes } => {
                let line = format!("✓ {path} ({})", HumanBytes(*bytes));
                if let Some(ref bar) = self.bar {
                    bar.println(line);
                } else {
                    tracing::info!("{line}");
                }
            }
        }
    }

    /// Finish and clear the progress display.
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    fn file_message(&self, index: usize, path: &str) -> String {
        let total = self.total_files.load(Ordering::Relaxed);
        format!("[{}/{total}] {}", index + 1, format_label(path))
    }
}

impl Default for SnapshotProgressPrinter {
    fn default() -> Self {
        Self::new()
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{msg} {bar:28.cyan/blue} {bytes:>9} / {total_bytes:>9} @ {binary_bytes_per_sec} ETA {eta}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
}

/// Shorten long paths to keep the bar on one line.
fn format_label(raw: &str) -> String {
    let char_count = raw.chars().count();
    if char_count <= MAX_LABEL {
        return raw.to_string();
    }
    // Keep the tail, which carries the file name
    let tail: String = raw.chars().skip(char_count - (MAX_LABEL - 1)).collect();
    format!("…{tail}")
}
