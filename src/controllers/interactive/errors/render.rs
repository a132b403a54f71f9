use std::error::Error;
use std::fmt;

use crate::core::data::view_state::ViewState;

/// A single frame that could not be produced. The scheduler keeps running.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderError {
    pub view_state: ViewState,
    pub message: String,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to render {}x{} view at ({}, {}) zoom {}: {}",
            self.view_state.pixel_width(),
            self.view_state.pixel_height(),
            self.view_state.focus_x(),
            self.view_state.focus_y(),
            self.view_state.zoom(),
            self.message
        )
    }
}

impl Error for RenderError {}
