use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidZoom(f64),
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoom(zoom) => {
                write!(f, "zoom factor must be positive and finite: {}", zoom)
            }
        }
    }
}

impl Error for ViewportError {}

/// The logical window into the complex plane: a centre and a zoom factor.
///
/// Knows nothing about the raster it will be sampled onto; the escape engine
/// combines it with pixel dimensions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    zoom_factor: f64,
}

impl Viewport {
    pub fn new(center_x: f64, center_y: f64, zoom_factor: f64) -> Result<Self, ViewportError> {
        if !(zoom_factor.is_finite() && zoom_factor > 0.0) {
            return Err(ViewportError::InvalidZoom(zoom_factor));
        }

        Ok(Self {
            center: Complex {
                real: center_x,
                imag: center_y,
            },
            zoom_factor,
        })
    }

    /// For callers holding a zoom that has already passed `new`'s checks.
    pub(crate) fn from_validated(center_x: f64, center_y: f64, zoom_factor: f64) -> Self {
        debug_assert!(zoom_factor.is_finite() && zoom_factor > 0.0);
        Self {
            center: Complex {
                real: center_x,
                imag: center_y,
            },
            zoom_factor,
        }
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center.real
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center.imag
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }
}
