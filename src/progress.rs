// src/progress.rs
/// Progress reporting for a run. The CLI forwards these to the logger;
/// tests record them.
pub trait Progress {
    /// Called at the start with the number of stages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when stage `stage` (0-based) completes.
    fn item_done(&mut self, _stage: usize) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
