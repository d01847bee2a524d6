//! Terminal output helpers.

use indicatif::{ProgressBar, ProgressStyle};

use spritedex_core::ProgressSnapshot;

/// Progress bar for one batch download.
pub fn batch_bar(label: &str, total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {msg:<24} [{bar:40.cyan/blue}] {pos}/{len} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );
    pb.set_message(label.to_string());
    pb
}

/// One-line summary of a finished batch.
pub fn batch_summary(label: &str, snapshot: &ProgressSnapshot) -> String {
    if snapshot.total == 0 {
        return format!("{label}: nothing to download");
    }
    let rate = snapshot.success_rate() * 100.0;
    if snapshot.failed == 0 {
        format!("{label}: {}/{} sprites cached", snapshot.completed, snapshot.total)
    } else {
        format!(
            "{label}: {}/{} sprites cached, {} failed ({rate:.1}% success)",
            snapshot.completed, snapshot.total, snapshot.failed
        )
    }
}

/// Truncate a string to `max_len` characters, appending "..." if cut.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
