use std::time::Duration;

use crate::core::data::pixel_buffer::RenderedImage;
use crate::core::data::view_state::ViewState;

#[derive(Debug)]
pub struct FrameData {
    pub view_state: ViewState,
    pub image: RenderedImage,
    pub render_duration: Duration,
}

impl FrameData {
    /// Human-readable render time, e.g. `"12.345 ms"`.
    #[must_use]
    pub fn elapsed_label(&self) -> String {
        format_elapsed(self.render_duration)
    }
}

#[must_use]
pub fn format_elapsed(duration: Duration) -> String {
    format!("{:.3} ms", duration.as_secs_f64() * 1000.0)
}
