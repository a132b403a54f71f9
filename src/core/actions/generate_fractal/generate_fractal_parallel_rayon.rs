use log::debug;
use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_matrix::{IterationMatrix, IterationMatrixError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::{MANDELBROT_SPAN, MandelbrotAlgorithm};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::pixel_axis_to_complex_coords;

/// Smallest pixel step native doubles can still resolve. Below it the view
/// is replaced by the over-zoom pattern.
pub const MIN_STEP: f64 = f64::MIN_POSITIVE * 4.0;

#[derive(Debug, Clone, PartialEq)]
pub enum EscapeEngineError {
    InvalidSize { width: u32, height: u32 },
    Algorithm(MandelbrotError),
    Matrix(IterationMatrixError),
}

impl std::fmt::Display for EscapeEngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EscapeEngineError::InvalidSize { width, height } => {
                write!(f, "raster size must be positive: {}x{}", width, height)
            }
            EscapeEngineError::Algorithm(e) => write!(f, "algorithm error: {}", e),
            EscapeEngineError::Matrix(e) => write!(f, "matrix error: {}", e),
        }
    }
}

impl std::error::Error for EscapeEngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EscapeEngineError::InvalidSize { .. } => None,
            EscapeEngineError::Algorithm(e) => Some(e),
            EscapeEngineError::Matrix(e) => Some(e),
        }
    }
}

impl From<MandelbrotError> for EscapeEngineError {
    fn from(err: MandelbrotError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<IterationMatrixError> for EscapeEngineError {
    fn from(err: IterationMatrixError) -> Self {
        Self::Matrix(err)
    }
}

/// Computes the Mandelbrot iteration matrix for `viewport` on a
/// `width` x `height` raster.
pub fn compute(
    width: u32,
    height: u32,
    iteration_limit: u32,
    viewport: &Viewport,
) -> Result<IterationMatrix, EscapeEngineError> {
    let algorithm = MandelbrotAlgorithm::new(iteration_limit)?;

    generate_fractal_parallel_rayon(width, height, viewport, &algorithm)
}

/// Evaluates `algorithm` for every pixel, one rayon task per row.
///
/// The viewport spans `3.5 / zoom` horizontally; pixels are square, so the
/// vertical step equals the horizontal one. Row `r` samples imaginary value
/// `bottom + r * step`, column `c` samples real value `left + c * step`.
pub fn generate_fractal_parallel_rayon<Alg>(
    width: u32,
    height: u32,
    viewport: &Viewport,
    algorithm: &Alg,
) -> Result<IterationMatrix, EscapeEngineError>
where
    Alg: FractalAlgorithm,
{
    if width == 0 || height == 0 {
        return Err(EscapeEngineError::InvalidSize { width, height });
    }

    let span = MANDELBROT_SPAN / viewport.zoom_factor();
    let step = span / f64::from(width);

    if step < MIN_STEP {
        debug!(
            "pixel step {:e} below precision floor at zoom {:e}, painting over-zoom pattern",
            step,
            viewport.zoom_factor()
        );
        return over_zoom(width, height, algorithm.max_iterations());
    }

    let left = viewport.center_x() - span / 2.0;
    let bottom = viewport.center_y() - f64::from(height / 2) * step;

    let scale_x = pixel_axis_to_complex_coords(left, step, width);
    let scale_y = pixel_axis_to_complex_coords(bottom, step, height);

    let mut cells = vec![0; width as usize * height as usize];

    cells
        .par_chunks_mut(width as usize)
        .zip(scale_y.par_iter())
        .for_each(|(row, &imag)| {
            for (cell, &real) in row.iter_mut().zip(&scale_x) {
                *cell = algorithm.compute(Complex { real, imag });
            }
        });

    Ok(IterationMatrix::from_cells(width, height, cells)?)
}

/// Two-tone sentinel: the limit fills the top-right and bottom-left
/// quadrants, zero fills the rest.
fn over_zoom(width: u32, height: u32, limit: u32) -> Result<IterationMatrix, EscapeEngineError> {
    let half_width = width / 2;
    let half_height = height / 2;

    let cells = (0..height)
        .flat_map(|row| {
            (0..width).map(move |col| {
                let right = col >= half_width;
                let painted = if row < half_height { right } else { !right };
                if painted { limit } else { 0 }
            })
        })
        .collect();

    Ok(IterationMatrix::from_cells(width, height, cells)?)
}
