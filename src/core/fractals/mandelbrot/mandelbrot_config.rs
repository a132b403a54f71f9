use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::data::view_state::{ViewState, ViewStateError, appropriate_height};
use crate::core::fractals::mandelbrot::algorithm::MANDELBROT_SPAN;
use std::ops::RangeInclusive;

const DEFAULT_CANVAS_WIDTH: u32 = 1024;
const DEFAULT_ITERATION_LIMIT: u32 = 100;
const DEFAULT_ZOOM_EXPONENT: f64 = 0.0;

/// Accepted ranges for the numeric entry controls. Raw values are clamped
/// into these before a view state is built.
pub struct ControlLimits;

impl ControlLimits {
    pub const ZOOM_EXPONENT: RangeInclusive<f64> = -1.0..=150.0;
    pub const ITERATION_LIMIT: RangeInclusive<u32> = 10..=100_000;
    pub const REAL: RangeInclusive<f64> = -2.5..=1.0;
    pub const IMAGINARY: RangeInclusive<f64> = -1.5..=1.5;
}

/// Centre of the whole set along the real axis.
pub(crate) fn default_focus() -> Complex {
    Complex {
        real: -2.5 + MANDELBROT_SPAN / 2.0,
        imag: 0.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub iteration_limit: u32,
    pub focus: Complex,
    pub zoom_exponent: f64,
    pub export_resolution: Resolution,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: appropriate_height(DEFAULT_CANVAS_WIDTH),
            iteration_limit: DEFAULT_ITERATION_LIMIT,
            focus: default_focus(),
            zoom_exponent: DEFAULT_ZOOM_EXPONENT,
            export_resolution: Resolution::default(),
        }
    }
}

impl ExplorerConfig {
    pub fn initial_view_state(&self) -> Result<ViewState, ViewStateError> {
        view_state_from_controls(
            self.canvas_width,
            self.canvas_height,
            self.iteration_limit,
            self.focus.real,
            self.focus.imag,
            self.zoom_exponent,
        )
    }
}

/// Builds a view state from raw control values. The zoom control is
/// exponential: a value `e` means a zoom factor of `10^e`.
pub fn view_state_from_controls(
    canvas_width: u32,
    canvas_height: u32,
    iteration_limit: u32,
    real: f64,
    imaginary: f64,
    zoom_exponent: f64,
) -> Result<ViewState, ViewStateError> {
    let limit = iteration_limit.clamp(
        *ControlLimits::ITERATION_LIMIT.start(),
        *ControlLimits::ITERATION_LIMIT.end(),
    );
    let real = real.clamp(*ControlLimits::REAL.start(), *ControlLimits::REAL.end());
    let imaginary = imaginary.clamp(
        *ControlLimits::IMAGINARY.start(),
        *ControlLimits::IMAGINARY.end(),
    );
    let zoom_exponent = zoom_exponent.clamp(
        *ControlLimits::ZOOM_EXPONENT.start(),
        *ControlLimits::ZOOM_EXPONENT.end(),
    );

    ViewState::new(
        canvas_width,
        canvas_height,
        limit,
        real,
        imaginary,
        10f64.powf(zoom_exponent),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_shows_the_whole_set() {
        let view = ExplorerConfig::default().initial_view_state().unwrap();

        assert_eq!(view.pixel_width(), 1024);
        assert_eq!(view.pixel_height(), 585);
        assert_eq!(view.iteration_limit(), 100);
        assert_eq!(view.focus_x(), -0.75);
        assert_eq!(view.focus_y(), 0.0);
        assert_eq!(view.zoom(), 1.0);
    }

    #[test]
    fn test_zoom_exponent_is_a_power_of_ten() {
        let view = view_state_from_controls(100, 57, 100, 0.0, 0.0, 2.0).unwrap();

        assert!((view.zoom() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_controls_are_clamped() {
        let view = view_state_from_controls(100, 57, 5, 9.0, -9.0, 500.0).unwrap();

        assert_eq!(view.iteration_limit(), 10);
        assert_eq!(view.focus_x(), 1.0);
        assert_eq!(view.focus_y(), -1.5);
        assert!((view.zoom() / 1e150 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_canvas_is_still_rejected() {
        assert!(view_state_from_controls(0, 0, 100, 0.0, 0.0, 0.0).is_err());
    }
}
