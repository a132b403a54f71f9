use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render::RenderError;
use crate::core::data::view_state::ViewState;

#[derive(Debug)]
pub enum RenderEvent {
    /// The worker has started rendering this state; the display may show a
    /// busy indicator.
    Started(ViewState),
    Frame(FrameData),
    Error(RenderError),
    /// No newer request was pending when the last render finished.
    Idle,
}
