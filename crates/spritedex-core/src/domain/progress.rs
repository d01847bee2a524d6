//! Batch download progress.

use serde::{Deserialize, Serialize};

/// Point-in-time state of a batch download.
///
/// Invariant: `completed + failed <= total`, with equality on the final
/// snapshot of a stream. Derived metrics are recomputed from the counters and
/// never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Number of assets in the batch, fixed at dispatch time.
    pub total: usize,
    /// Assets fetched and written successfully.
    pub completed: usize,
    /// Assets whose fetch or write failed.
    pub failed: usize,
}

impl ProgressSnapshot {
    /// Create a snapshot from raw counters.
    pub const fn new(total: usize, completed: usize, failed: usize) -> Self {
        Self {
            total,
            completed,
            failed,
        }
    }

    /// Snapshot for a batch that has not finished any asset yet.
    pub const fn started(total: usize) -> Self {
        Self::new(total, 0, 0)
    }

    /// Assets that have finished, successfully or not.
    pub const fn processed(&self) -> usize {
        self.completed + self.failed
    }

    /// Whether every asset in the batch has finished.
    pub const fn is_complete(&self) -> bool {
        self.processed() >= self.total
    }

    /// Fraction of the batch that has finished, `0.0` for an empty batch.
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.processed() as f64 / self.total as f64
    }

    /// Fraction of finished assets that succeeded, `1.0` before any finish.
    #[allow(clippy::cast_precision_loss)]
    pub fn success_rate(&self) -> f64 {
        let processed = self.processed();
        if processed == 0 {
            return 1.0;
        }
        self.completed as f64 / processed as f64
    }
}
