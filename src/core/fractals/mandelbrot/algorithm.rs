use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Horizontal extent of the complex plane shown at zoom 1.0 (-2.5 to 1.0).
pub const MANDELBROT_SPAN: f64 = 3.5;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Counts `z = z² + c` steps from `z = 0` until `|z|² >= 4` or the limit
    /// is reached. A result equal to the limit means "presumed in the set".
    #[inline]
    fn compute(&self, c: Complex) -> u32 {
        let mut z = Complex::ZERO;
        let mut iterations = 0;

        while iterations < self.max_iterations && z.magnitude_squared() < ESCAPE_RADIUS_SQUARED {
            z = z * z + c;
            iterations += 1;
        }

        iterations
    }
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroIterationLimit);
        }

        Ok(Self { max_iterations })
    }
}
