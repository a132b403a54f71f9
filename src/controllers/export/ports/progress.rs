/// Stepped progress reporting for a background export.
///
/// Invoked from export worker threads, never from the caller's thread after
/// `export` has returned.
pub trait ProgressSink: Send + Sync {
    /// Progress moved to `step` (out of [`EXPORT_STEPS`](crate::EXPORT_STEPS)).
    fn step(&self, step: u32, note: &str);

    /// The export failed. `diagnostic` holds the error and its full cause chain.
    fn failed(&self, _diagnostic: &str) {}

    /// Called exactly once when the export reaches any terminal state.
    fn close(&self);
}
