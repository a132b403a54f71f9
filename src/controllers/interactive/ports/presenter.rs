use crate::controllers::interactive::events::render::RenderEvent;

/// Receives render events on the render worker thread.
///
/// Implementations must not block for long: a display owned by an event loop
/// should forward the event onto that loop rather than draw in place.
pub trait DisplayPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
