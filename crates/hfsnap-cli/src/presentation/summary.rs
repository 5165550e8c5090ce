//! Final summary line.

use hfsnap_core::SnapshotReport;
use indicatif::HumanBytes;

/// One-line description of a finished snapshot.
pub fn format_summary(report: &SnapshotReport) -> String {
    format!(
        "Downloaded {} ({} files, {}) at {} into {}",
        report.repo_id,
        report.files.len(),
        HumanBytes(report.total_bytes),
        report.commit_sha,
        report.local_dir.display()
    )
}
