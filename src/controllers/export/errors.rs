use std::error::Error;
use std::fmt;
use std::io;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::EscapeEngineError;
use crate::core::data::view_state::ViewStateError;
use crate::storage::write_png::StorageError;

#[derive(Debug)]
pub enum ExportError {
    /// The trigger is disabled while another export is in flight.
    AlreadyRunning,
    ViewState(ViewStateError),
    Spawn(io::Error),
    Computation(EscapeEngineError),
    WorkerPanicked(&'static str),
    Storage(StorageError),
}

impl ExportError {
    /// The message followed by every underlying cause, one per line.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        let mut text = self.to_string();
        let mut cause = self.source();

        while let Some(err) = cause {
            text.push_str("\ncaused by: ");
            text.push_str(&err.to_string());
            cause = err.source();
        }

        text
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRunning => write!(f, "an export is already in progress"),
            Self::ViewState(_) => write!(f, "unable to derive export view"),
            Self::Spawn(_) => write!(f, "unable to start export worker"),
            Self::Computation(_) => write!(f, "unable to compute export matrix"),
            Self::WorkerPanicked(worker) => write!(f, "export {} worker panicked", worker),
            Self::Storage(_) => write!(f, "unable to save exported image"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AlreadyRunning | Self::WorkerPanicked(_) => None,
            Self::ViewState(err) => Some(err),
            Self::Spawn(err) => Some(err),
            Self::Computation(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<ViewStateError> for ExportError {
    fn from(err: ViewStateError) -> Self {
        Self::ViewState(err)
    }
}

impl From<EscapeEngineError> for ExportError {
    fn from(err: EscapeEngineError) -> Self {
        Self::Computation(err)
    }
}

impl From<StorageError> for ExportError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}
