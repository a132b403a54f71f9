use std::{error::Error, fmt};

/// Rejected Mandelbrot parameters. Shared by the engine and by `ViewState`,
/// which validates the same limit before a render is ever requested.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MandelbrotError {
    ZeroIterationLimit,
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroIterationLimit => write!(f, "iteration limit must be greater than zero"),
        }
    }
}

impl Error for MandelbrotError {}
