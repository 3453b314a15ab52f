//! Build progress reporting.

/// Trait for receiving per-row progress updates during the build pass.
pub trait IngestProgress {
    /// Called for each eligible sheet row as it is processed.
    fn on_row(&self, current: usize, total: usize, sku: &str);

    /// Called when the pass is complete.
    fn on_complete(&self, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl IngestProgress for SilentProgress {
    fn on_row(&self, _current: usize, _total: usize, _sku: &str) {}
    fn on_complete(&self, _message: &str) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl IngestProgress for LogProgress {
    fn on_row(&self, current: usize, total: usize, sku: &str) {
        if current.is_multiple_of(100) || current == total {
            log::info!("  [{}/{}] {}", current, total, sku);
        }
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
