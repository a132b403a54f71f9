use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, warn};

use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::DisplayPresenterPort;

/// Forwards render events to whichever thread owns the display.
pub struct ChannelPresenter {
    events: Sender<RenderEvent>,
}

impl DisplayPresenterPort for ChannelPresenter {
    fn present(&self, event: RenderEvent) {
        match &event {
            RenderEvent::Started(view_state) => debug!(
                "busy: rendering {}x{}",
                view_state.pixel_width(),
                view_state.pixel_height()
            ),
            RenderEvent::Error(err) => warn!("{}", err),
            RenderEvent::Idle => debug!("idle"),
            RenderEvent::Frame(_) => {}
        }

        if self.events.send(event).is_err() {
            debug!("display receiver dropped, discarding render event");
        }
    }
}

impl ChannelPresenter {
    pub fn new() -> (Self, Receiver<RenderEvent>) {
        let (events, receiver) = unbounded();

        (Self { events }, receiver)
    }
}
