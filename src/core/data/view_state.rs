use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::algorithm::MANDELBROT_SPAN;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewStateError {
    InvalidSize { width: u32, height: u32 },
    IterationLimit(MandelbrotError),
    Viewport(ViewportError),
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "view size must be positive: {}x{}", width, height)
            }
            Self::IterationLimit(err) => write!(f, "invalid iteration limit: {}", err),
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
        }
    }
}

impl Error for ViewStateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IterationLimit(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::InvalidSize { .. } => None,
        }
    }
}

impl From<MandelbrotError> for ViewStateError {
    fn from(err: MandelbrotError) -> Self {
        Self::IterationLimit(err)
    }
}

impl From<ViewportError> for ViewStateError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

/// An immutable snapshot of everything that determines one rendered frame.
///
/// Every input source builds a fresh value; a published state is superseded,
/// never mutated. Equality is bitwise on the floating point fields so that a
/// repeated request for the same view can be recognised and skipped.
#[derive(Debug, Copy, Clone)]
pub struct ViewState {
    pixel_width: u32,
    pixel_height: u32,
    iteration_limit: u32,
    focus_x: f64,
    focus_y: f64,
    zoom: f64,
    pixel_step: f64,
}

impl ViewState {
    pub fn new(
        pixel_width: u32,
        pixel_height: u32,
        iteration_limit: u32,
        focus_x: f64,
        focus_y: f64,
        zoom: f64,
    ) -> Result<Self, ViewStateError> {
        if pixel_width == 0 || pixel_height == 0 {
            return Err(ViewStateError::InvalidSize {
                width: pixel_width,
                height: pixel_height,
            });
        }

        if iteration_limit == 0 {
            return Err(MandelbrotError::ZeroIterationLimit.into());
        }

        // Validates the zoom and centre the same way the engine input does.
        Viewport::new(focus_x, focus_y, zoom)?;

        let pixel_step = (MANDELBROT_SPAN / zoom) / pixel_width as f64;

        Ok(Self {
            pixel_width,
            pixel_height,
            iteration_limit,
            focus_x,
            focus_y,
            zoom,
            pixel_step,
        })
    }

    #[must_use]
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    #[must_use]
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    #[must_use]
    pub fn iteration_limit(&self) -> u32 {
        self.iteration_limit
    }

    #[must_use]
    pub fn focus_x(&self) -> f64 {
        self.focus_x
    }

    #[must_use]
    pub fn focus_y(&self) -> f64 {
        self.focus_y
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn pixel_step(&self) -> f64 {
        self.pixel_step
    }

    /// Width of the visible window in complex-plane units.
    #[must_use]
    pub fn span(&self) -> f64 {
        MANDELBROT_SPAN / self.zoom
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::from_validated(self.focus_x, self.focus_y, self.zoom)
    }

    /// The same view re-rastered at an export resolution.
    pub fn with_resolution(&self, resolution: Resolution) -> Result<Self, ViewStateError> {
        Self::new(
            resolution.width(),
            resolution.height(),
            self.iteration_limit,
            self.focus_x,
            self.focus_y,
            self.zoom,
        )
    }

    /// Moves the focus opposite to a pixel displacement, as when the image is
    /// dragged by `(dx, dy)` pixels.
    pub fn panned_by(&self, dx: i32, dy: i32) -> Result<Self, ViewStateError> {
        Self::new(
            self.pixel_width,
            self.pixel_height,
            self.iteration_limit,
            self.focus_x - f64::from(dx) * self.pixel_step,
            self.focus_y - f64::from(dy) * self.pixel_step,
            self.zoom,
        )
    }

    /// Moves the focus onto the complex coordinate under pixel `(x, y)`.
    pub fn centered_on(&self, x: i32, y: i32) -> Result<Self, ViewStateError> {
        let dx = (self.pixel_width / 2) as i64 - i64::from(x);
        let dy = (self.pixel_height / 2) as i64 - i64::from(y);

        Self::new(
            self.pixel_width,
            self.pixel_height,
            self.iteration_limit,
            self.focus_x - self.pixel_step * dx as f64,
            self.focus_y - self.pixel_step * dy as f64,
            self.zoom,
        )
    }

    fn bits(&self) -> (u32, u32, u32, u64, u64, u64, u64) {
        (
            self.pixel_width,
            self.pixel_height,
            self.iteration_limit,
            self.focus_x.to_bits(),
            self.focus_y.to_bits(),
            self.zoom.to_bits(),
            self.pixel_step.to_bits(),
        )
    }
}

impl PartialEq for ViewState {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for ViewState {}

impl Hash for ViewState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

/// Height matching the 3.5 : 2 aspect of the whole set, always odd so the
/// focus falls on an exact row.
#[must_use]
pub fn appropriate_height(width: u32) -> u32 {
    let height = ((f64::from(width) / 3.5) * 2.0) as u32;

    if height % 2 == 0 { height + 1 } else { height }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ViewState {
        ViewState::new(800, 457, 100, -0.5, 0.0, 1.0).unwrap()
    }

    #[test]
    fn test_pixel_step_is_cached_from_span() {
        let view = state();

        assert_eq!(view.span(), 3.5);
        assert_eq!(view.pixel_step(), 3.5 / 800.0);
    }

    #[test]
    fn test_equal_fields_are_equal_states() {
        assert_eq!(state(), state());
    }

    #[test]
    fn test_any_field_change_breaks_equality() {
        let base = state();

        assert_ne!(base, ViewState::new(801, 457, 100, -0.5, 0.0, 1.0).unwrap());
        assert_ne!(base, ViewState::new(800, 459, 100, -0.5, 0.0, 1.0).unwrap());
        assert_ne!(base, ViewState::new(800, 457, 101, -0.5, 0.0, 1.0).unwrap());
        assert_ne!(base, ViewState::new(800, 457, 100, -0.4, 0.0, 1.0).unwrap());
        assert_ne!(base, ViewState::new(800, 457, 100, -0.5, 0.1, 1.0).unwrap());
        assert_ne!(base, ViewState::new(800, 457, 100, -0.5, 0.0, 1.5).unwrap());
    }

    #[test]
    fn test_equality_is_bitwise_for_signed_zero() {
        let positive = ViewState::new(10, 10, 10, 0.0, 0.0, 1.0).unwrap();
        let negative = ViewState::new(10, 10, 10, -0.0, 0.0, 1.0).unwrap();

        assert_ne!(positive, negative);
    }

    #[test]
    fn test_rejects_zero_size() {
        assert_eq!(
            ViewState::new(0, 10, 10, 0.0, 0.0, 1.0).unwrap_err(),
            ViewStateError::InvalidSize {
                width: 0,
                height: 10
            }
        );
    }

    #[test]
    fn test_rejects_zero_limit() {
        assert_eq!(
            ViewState::new(10, 10, 0, 0.0, 0.0, 1.0).unwrap_err(),
            ViewStateError::IterationLimit(MandelbrotError::ZeroIterationLimit)
        );
    }

    #[test]
    fn test_zero_limit_error_chains_to_mandelbrot_error() {
        let err = ViewState::new(10, 10, 0, 0.0, 0.0, 1.0).unwrap_err();

        assert_eq!(
            err.to_string(),
            "invalid iteration limit: iteration limit must be greater than zero"
        );
        assert_eq!(
            err.source().map(|source| source.to_string()).as_deref(),
            Some("iteration limit must be greater than zero")
        );
    }

    #[test]
    fn test_rejects_non_positive_zoom() {
        assert!(matches!(
            ViewState::new(10, 10, 10, 0.0, 0.0, 0.0),
            Err(ViewStateError::Viewport(ViewportError::InvalidZoom(_)))
        ));
    }

    #[test]
    fn test_with_resolution_keeps_view_and_recomputes_step() {
        let export = state().with_resolution(Resolution::Hd1080).unwrap();

        assert_eq!(export.pixel_width(), 1920);
        assert_eq!(export.pixel_height(), 1080);
        assert_eq!(export.focus_x(), -0.5);
        assert_eq!(export.iteration_limit(), 100);
        assert_eq!(export.pixel_step(), 3.5 / 1920.0);
    }

    #[test]
    fn test_panned_by_moves_focus_against_drag() {
        let view = ViewState::new(350, 201, 50, 0.0, 0.0, 1.0).unwrap();
        let panned = view.panned_by(10, -20).unwrap();

        assert!((panned.focus_x() - -0.1).abs() < 1e-12);
        assert!((panned.focus_y() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_centered_on_middle_pixel_is_unchanged() {
        let view = ViewState::new(350, 201, 50, -0.75, 0.25, 1.0).unwrap();

        assert_eq!(view.centered_on(175, 100).unwrap(), view);
    }

    #[test]
    fn test_centered_on_offsets_by_pixel_step() {
        let view = ViewState::new(350, 201, 50, 0.0, 0.0, 1.0).unwrap();
        let centred = view.centered_on(185, 90).unwrap();

        assert!((centred.focus_x() - 0.1).abs() < 1e-12);
        assert!((centred.focus_y() - -0.1).abs() < 1e-12);
    }

    #[test]
    fn test_viewport_mirrors_focus_and_zoom() {
        let viewport = state().viewport();

        assert_eq!(viewport.center_x(), -0.5);
        assert_eq!(viewport.center_y(), 0.0);
        assert_eq!(viewport.zoom_factor(), 1.0);
    }

    #[test]
    fn test_appropriate_height_is_odd() {
        assert_eq!(appropriate_height(800), 457);
        assert_eq!(appropriate_height(1024), 585);
        assert_eq!(appropriate_height(350), 201);
        for width in 1..500 {
            assert_eq!(appropriate_height(width) % 2, 1);
        }
    }
}
