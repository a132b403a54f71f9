use crate::core::data::complex::Complex;

/// Per-point escape-time rule. Implementations must be pure so rows can be
/// evaluated in any order on any thread.
pub trait FractalAlgorithm: Sync {
    fn max_iterations(&self) -> u32;

    fn compute(&self, point: Complex) -> u32;
}
