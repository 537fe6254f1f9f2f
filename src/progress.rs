// src/progress.rs
use std::ops::Range;

/// Lightweight progress reporting used by the harvest loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of batches.
    fn begin(&mut self, _total_batches: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one id batch has been fetched and folded in.
    /// `kept` is the number of eligible profiles in it.
    fn batch_done(&mut self, _ids: &Range<u64>, _kept: usize) {}

    /// Called at the end of a successful harvest.
    fn finish(&mut self) {}
}
