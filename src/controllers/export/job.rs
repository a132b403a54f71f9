use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

use crate::controllers::export::errors::ExportError;

/// A running export. Dropping it detaches the worker; the export still
/// completes and reports through its progress sink.
#[derive(Debug)]
pub struct ExportJob {
    destination: PathBuf,
    worker: JoinHandle<Result<PathBuf, ExportError>>,
}

impl ExportJob {
    pub(crate) fn new(
        destination: PathBuf,
        worker: JoinHandle<Result<PathBuf, ExportError>>,
    ) -> Self {
        Self {
            destination,
            worker,
        }
    }

    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Blocks until the export has been saved or has failed.
    pub fn wait(self) -> Result<PathBuf, ExportError> {
        self.worker
            .join()
            .map_err(|_| ExportError::WorkerPanicked("save"))?
    }
}
