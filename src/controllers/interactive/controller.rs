use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::errors::scheduler::SchedulerError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::DisplayPresenterPort;
use crate::controllers::panics::panic_message;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    EscapeEngineError, compute,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::compose;
use crate::core::data::pixel_buffer::RenderedImage;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::palette_cache::PaletteCache;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, error, info};
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The state differs from the last published one and was queued.
    Queued,
    /// The state equals the last published one; nothing was queued.
    Unchanged,
}

struct SharedState {
    current: Mutex<Option<ViewState>>,
    renders_started: AtomicU64,
    palettes: Arc<PaletteCache>,
    presenter_port: Arc<dyn DisplayPresenterPort>,
}

pub struct RenderScheduler {
    shared: Arc<SharedState>,
    sender: Option<Sender<ViewState>>,
    worker: Option<JoinHandle<()>>,
}

impl RenderScheduler {
    pub fn new(
        presenter_port: Arc<dyn DisplayPresenterPort>,
        palettes: Arc<PaletteCache>,
    ) -> io::Result<Self> {
        let shared = Arc::new(SharedState {
            current: Mutex::new(None),
            renders_started: AtomicU64::new(0),
            palettes,
            presenter_port,
        });

        let (sender, receiver) = unbounded();
        let worker_shared = Arc::clone(&shared);

        let worker = thread::Builder::new()
            .name("mandelbrot-render".into())
            .spawn(move || Self::worker_loop(&worker_shared, &receiver))?;

        info!("render scheduler started");

        Ok(Self {
            shared,
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    /// Publishes `view_state` as the current view and wakes the worker,
    /// unless it equals the state already published.
    pub fn submit(&self, view_state: ViewState) -> Result<SubmitOutcome, SchedulerError> {
        let sender = self.sender.as_ref().ok_or(SchedulerError::Stopped)?;

        // Held across the send so queue order matches publish order.
        let mut current = self
            .shared
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if *current == Some(view_state) {
            return Ok(SubmitOutcome::Unchanged);
        }

        // Published only once queued, so a refused state can be resubmitted.
        sender
            .send(view_state)
            .map_err(|_| SchedulerError::QueueClosed)?;
        *current = Some(view_state);

        Ok(SubmitOutcome::Queued)
    }

    /// The most recently published view state.
    #[must_use]
    pub fn current(&self) -> Option<ViewState> {
        *self
            .shared
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn renders_started(&self) -> u64 {
        self.shared.renders_started.load(Ordering::Acquire)
    }

    /// Closes the queue and waits for the worker to finish its current frame.
    pub fn shutdown(&mut self) {
        self.sender.take();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                error!("render worker terminated abnormally");
            }
            info!("render scheduler stopped");
        }
    }

    fn worker_loop(shared: &SharedState, receiver: &Receiver<ViewState>) {
        // recv fails once every sender is gone, which is how shutdown reaches us.
        while let Ok(first) = receiver.recv() {
            let mut skipped = 0usize;
            let view_state = receiver.try_iter().fold(first, |_, newer| {
                skipped += 1;
                newer
            });

            if skipped > 0 {
                debug!("coalesced {} superseded view states", skipped);
            }

            shared.renders_started.fetch_add(1, Ordering::AcqRel);

            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                Self::render_frame(shared, view_state);
            }));

            if let Err(payload) = outcome {
                let message = panic_message(payload.as_ref());
                error!("render worker recovered from panic: {}", message);

                Self::present_contained(
                    shared,
                    RenderEvent::Error(RenderError {
                        view_state,
                        message,
                    }),
                );
            }

            if receiver.is_empty() {
                Self::present_contained(shared, RenderEvent::Idle);
            }
        }

        debug!("render queue closed, worker exiting");
    }

    /// Delivers an event outside any frame; a panicking presenter is logged
    /// and the worker carries on.
    fn present_contained(shared: &SharedState, event: RenderEvent) {
        let delivered = panic::catch_unwind(AssertUnwindSafe(|| {
            shared.presenter_port.present(event);
        }));

        if let Err(payload) = delivered {
            error!(
                "presenter panicked outside a frame: {}",
                panic_message(payload.as_ref())
            );
        }
    }

    fn render_frame(shared: &SharedState, view_state: ViewState) {
        shared
            .presenter_port
            .present(RenderEvent::Started(view_state));

        let start = Instant::now();
        let result = Self::render_request(&shared.palettes, &view_state);
        let render_duration = start.elapsed();

        match result {
            Ok(image) => {
                let frame = FrameData {
                    view_state,
                    image,
                    render_duration,
                };
                debug!(
                    "rendered {}x{} limit {} in {}",
                    view_state.pixel_width(),
                    view_state.pixel_height(),
                    view_state.iteration_limit(),
                    frame.elapsed_label()
                );
                shared.presenter_port.present(RenderEvent::Frame(frame));
            }
            Err(err) => {
                error!("render failed: {}", err);
                shared
                    .presenter_port
                    .present(RenderEvent::Error(RenderError {
                        view_state,
                        message: err.to_string(),
                    }));
            }
        }
    }

    fn render_request(
        palettes: &PaletteCache,
        view_state: &ViewState,
    ) -> Result<RenderedImage, EscapeEngineError> {
        let palette = palettes.colours_for(view_state.iteration_limit());
        let matrix = compute(
            view_state.pixel_width(),
            view_state.pixel_height(),
            view_state.iteration_limit(),
            &view_state.viewport(),
        )?;

        Ok(compose(matrix, &palette))
    }
}

impl Drop for RenderScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
