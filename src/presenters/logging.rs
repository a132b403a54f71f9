use log::{error, info};

use crate::controllers::export::EXPORT_STEPS;
use crate::controllers::export::ports::progress::ProgressSink;

/// Reports export progress through the logger.
pub struct LogProgressSink {}

impl ProgressSink for LogProgressSink {
    fn step(&self, step: u32, note: &str) {
        info!("export [{}/{}] {}", step, EXPORT_STEPS, note);
    }

    fn failed(&self, diagnostic: &str) {
        error!("export failed:\n{}", diagnostic);
    }

    fn close(&self) {
        info!("export finished");
    }
}

impl Default for LogProgressSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogProgressSink {
    pub fn new() -> Self {
        Self {}
    }
}
