use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use log::{error, info};

use crate::controllers::export::errors::ExportError;
use crate::controllers::export::job::ExportJob;
use crate::controllers::export::ports::destination::DestinationChooser;
use crate::controllers::export::ports::progress::ProgressSink;
use crate::controllers::panics::panic_message;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    EscapeEngineError, compute,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::compose;
use crate::core::data::iteration_matrix::IterationMatrix;
use crate::core::data::resolution::Resolution;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::palette_cache::PaletteCache;

/// Number of the final progress step.
pub const EXPORT_STEPS: u32 = 7;

const NOTES: [&str; EXPORT_STEPS as usize + 1] = [
    "Submitting background build",
    "Selecting destination",
    "Background processing",
    "Building colours",
    "Awaiting matrix completion",
    "Building image",
    "Saving image",
    "Saved",
];

type MatrixWorker = JoinHandle<Result<IterationMatrix, EscapeEngineError>>;

/// Suggested file name for an export of `view_state`.
#[must_use]
pub fn export_file_name(view_state: &ViewState, extension: &str) -> String {
    format!(
        "Mandelbrot_real{:.6}_imag{:.6}_zoom{:.6}_limit{}.{}",
        view_state.focus_x(),
        view_state.focus_y(),
        view_state.zoom(),
        view_state.iteration_limit(),
        extension
    )
}

/// Clears the in-flight flag when the export reaches a terminal state,
/// including unwinding out of a worker.
struct TriggerGuard {
    in_flight: Arc<AtomicBool>,
}

impl TriggerGuard {
    fn acquire(in_flight: &Arc<AtomicBool>) -> Option<Self> {
        in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self {
                in_flight: Arc::clone(in_flight),
            })
    }
}

impl Drop for TriggerGuard {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

struct SaveRequest {
    view_state: ViewState,
    destination: PathBuf,
    matrix_worker: MatrixWorker,
    palettes: Arc<PaletteCache>,
    writer: Arc<dyn FilePresenterPort>,
    progress: Arc<dyn ProgressSink>,
}

pub struct ExportController {
    in_flight: Arc<AtomicBool>,
    palettes: Arc<PaletteCache>,
    writer: Arc<dyn FilePresenterPort>,
}

impl ExportController {
    pub fn new(palettes: Arc<PaletteCache>, writer: Arc<dyn FilePresenterPort>) -> Self {
        Self {
            in_flight: Arc::new(AtomicBool::new(false)),
            palettes,
            writer,
        }
    }

    /// Whether a new export may be started.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.in_flight.load(Ordering::Acquire)
    }

    /// Starts exporting `view_state` at `resolution`.
    ///
    /// The matrix computation is submitted before `chooser` is consulted so
    /// it overlaps with destination selection. Returns `Ok(None)` when the
    /// chooser cancels; a computation already submitted then runs to
    /// completion on its own and is discarded.
    pub fn export(
        &self,
        view_state: &ViewState,
        resolution: Resolution,
        chooser: &dyn DestinationChooser,
        progress: Arc<dyn ProgressSink>,
    ) -> Result<Option<ExportJob>, ExportError> {
        let trigger = TriggerGuard::acquire(&self.in_flight).ok_or(ExportError::AlreadyRunning)?;

        let target = match view_state.with_resolution(resolution) {
            Ok(target) => target,
            Err(err) => return Err(abort(progress.as_ref(), err.into())),
        };

        info!(
            "exporting at {} with limit {}",
            resolution,
            target.iteration_limit()
        );

        report(progress.as_ref(), 0);
        let matrix_worker = match spawn_matrix_worker(target) {
            Ok(handle) => handle,
            Err(err) => return Err(abort(progress.as_ref(), err)),
        };

        report(progress.as_ref(), 1);
        let suggested_name = export_file_name(view_state, self.writer.extension());
        let Some(destination) = chooser.choose(&suggested_name) else {
            info!("export cancelled before a destination was chosen");
            progress.close();
            return Ok(None);
        };

        report(progress.as_ref(), 2);
        let request = SaveRequest {
            view_state: target,
            destination: destination.clone(),
            matrix_worker,
            palettes: Arc::clone(&self.palettes),
            writer: Arc::clone(&self.writer),
            progress: Arc::clone(&progress),
        };

        let worker = thread::Builder::new()
            .name("mandelbrot-export-save".into())
            .spawn(move || run_save(trigger, request));

        match worker {
            Ok(worker) => Ok(Some(ExportJob::new(destination, worker))),
            Err(err) => Err(abort(progress.as_ref(), ExportError::Spawn(err))),
        }
    }
}

fn report(progress: &dyn ProgressSink, step: u32) {
    progress.step(step, NOTES[step as usize]);
}

fn abort(progress: &dyn ProgressSink, err: ExportError) -> ExportError {
    let diagnostic = err.diagnostic();
    error!("export failed: {}", diagnostic);
    progress.failed(&diagnostic);
    progress.close();
    err
}

fn spawn_matrix_worker(view_state: ViewState) -> Result<MatrixWorker, ExportError> {
    thread::Builder::new()
        .name("mandelbrot-export".into())
        .spawn(move || {
            compute(
                view_state.pixel_width(),
                view_state.pixel_height(),
                view_state.iteration_limit(),
                &view_state.viewport(),
            )
        })
        .map_err(ExportError::Spawn)
}

fn run_save(trigger: TriggerGuard, request: SaveRequest) -> Result<PathBuf, ExportError> {
    // Released last, after the sink has been closed.
    let _trigger = trigger;
    let progress = Arc::clone(&request.progress);
    let destination = request.destination.clone();

    // A panicking writer or compositor still ends in failed() and close().
    let result = panic::catch_unwind(AssertUnwindSafe(|| save(request))).unwrap_or_else(|payload| {
        error!(
            "export save worker panicked: {}",
            panic_message(payload.as_ref())
        );
        Err(ExportError::WorkerPanicked("save"))
    });

    match &result {
        Ok(path) => info!("export saved to {}", path.display()),
        Err(err) => {
            let diagnostic = err.diagnostic();
            error!(
                "unable to save export to {}: {}",
                destination.display(),
                diagnostic
            );
            progress.failed(&diagnostic);
        }
    }

    progress.close();
    result
}

fn save(request: SaveRequest) -> Result<PathBuf, ExportError> {
    let SaveRequest {
        view_state,
        destination,
        matrix_worker,
        palettes,
        writer,
        progress,
    } = request;

    report(progress.as_ref(), 3);
    let palette = palettes.colours_for(view_state.iteration_limit());

    report(progress.as_ref(), 4);
    let matrix = matrix_worker.join().map_err(|payload| {
        error!(
            "export matrix worker panicked: {}",
            panic_message(payload.as_ref())
        );
        ExportError::WorkerPanicked("matrix")
    })??;

    report(progress.as_ref(), 5);
    let image = compose(matrix, &palette);

    report(progress.as_ref(), 6);
    writer.present(&image, &destination)?;

    report(progress.as_ref(), EXPORT_STEPS);
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_buffer::RenderedImage;
    use crate::presenters::file::png::PngFilePresenter;
    use crate::storage::write_png::StorageError;
    use crossbeam_channel::{Receiver, bounded};
    use std::io;
    use std::path::Path;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    struct FixedChooser {
        destination: Option<PathBuf>,
        suggested: Mutex<Option<String>>,
    }

    impl FixedChooser {
        fn new(destination: Option<PathBuf>) -> Self {
            Self {
                destination,
                suggested: Mutex::new(None),
            }
        }
    }

    impl DestinationChooser for FixedChooser {
        fn choose(&self, suggested_name: &str) -> Option<PathBuf> {
            *self.suggested.lock().unwrap() = Some(suggested_name.to_string());
            self.destination.clone()
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        steps: Mutex<Vec<(u32, String)>>,
        failure: Mutex<Option<String>>,
        closes: AtomicUsize,
    }

    impl ProgressSink for RecordingSink {
        fn step(&self, step: u32, note: &str) {
            self.steps.lock().unwrap().push((step, note.to_string()));
        }

        fn failed(&self, diagnostic: &str) {
            *self.failure.lock().unwrap() = Some(diagnostic.to_string());
        }

        fn close(&self) {
            self.closes.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl RecordingSink {
        fn step_numbers(&self) -> Vec<u32> {
            self.steps.lock().unwrap().iter().map(|(step, _)| *step).collect()
        }
    }

    struct FailingWriter;

    impl FilePresenterPort for FailingWriter {
        fn present(&self, _image: &RenderedImage, _filepath: &Path) -> Result<(), StorageError> {
            Err(StorageError::Io(io::Error::other("disk full")))
        }

        fn extension(&self) -> &str {
            "png"
        }
    }

    struct PanickingWriter;

    impl FilePresenterPort for PanickingWriter {
        fn present(&self, _image: &RenderedImage, _filepath: &Path) -> Result<(), StorageError> {
            panic!("encoder exploded");
        }

        fn extension(&self) -> &str {
            "png"
        }
    }

    /// Holds the save worker until the test releases it.
    struct GatedWriter {
        gate: Receiver<()>,
    }

    impl FilePresenterPort for GatedWriter {
        fn present(&self, _image: &RenderedImage, _filepath: &Path) -> Result<(), StorageError> {
            let _ = self.gate.recv_timeout(Duration::from_secs(10));
            Ok(())
        }

        fn extension(&self) -> &str {
            "png"
        }
    }

    fn view() -> ViewState {
        ViewState::new(1024, 585, 20, -0.75, 0.0, 1.0).unwrap()
    }

    fn controller_with(writer: Arc<dyn FilePresenterPort>) -> ExportController {
        ExportController::new(Arc::new(PaletteCache::new()), writer)
    }

    #[test]
    fn test_export_writes_png_at_requested_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("export.png");
        let controller = controller_with(Arc::new(PngFilePresenter::new()));
        let chooser = FixedChooser::new(Some(destination.clone()));
        let sink = Arc::new(RecordingSink::default());

        let job = controller
            .export(&view(), Resolution::Svga, &chooser, sink.clone())
            .unwrap()
            .expect("destination was chosen");
        assert_eq!(job.destination(), destination.as_path());

        let saved = job.wait().unwrap();

        assert_eq!(saved, destination);
        assert_eq!(image::open(&saved).unwrap().to_rgba8().dimensions(), (800, 600));
        assert_eq!(sink.step_numbers(), (0..=EXPORT_STEPS).collect::<Vec<_>>());
        assert_eq!(sink.steps.lock().unwrap()[4].1, "Awaiting matrix completion");
        assert_eq!(sink.closes.load(Ordering::SeqCst), 1);
        assert!(sink.failure.lock().unwrap().is_none());
        assert!(controller.is_enabled());
    }

    #[test]
    fn test_chooser_receives_suggested_name() {
        let controller = controller_with(Arc::new(PngFilePresenter::new()));
        let chooser = FixedChooser::new(None);
        let state = ViewState::new(640, 365, 250, -0.5, 0.25, 12.5).unwrap();

        controller
            .export(&state, Resolution::Svga, &chooser, Arc::new(RecordingSink::default()))
            .unwrap();

        assert_eq!(
            chooser.suggested.lock().unwrap().as_deref(),
            Some("Mandelbrot_real-0.500000_imag0.250000_zoom12.500000_limit250.png")
        );
    }

    #[test]
    fn test_cancelled_export_closes_and_reenables() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller_with(Arc::new(PngFilePresenter::new()));
        let chooser = FixedChooser::new(None);
        let sink = Arc::new(RecordingSink::default());

        let job = controller
            .export(&view(), Resolution::Svga, &chooser, sink.clone())
            .unwrap();

        assert!(job.is_none());
        assert_eq!(sink.step_numbers(), vec![0, 1]);
        assert_eq!(sink.closes.load(Ordering::SeqCst), 1);
        assert!(controller.is_enabled());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_second_export_while_running_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let (release, gate) = bounded::<()>(0);
        let controller = controller_with(Arc::new(GatedWriter { gate }));
        let chooser = FixedChooser::new(Some(dir.path().join("first.png")));
        let idle_sink = Arc::new(RecordingSink::default());

        let job = controller
            .export(&view(), Resolution::Svga, &chooser, Arc::new(RecordingSink::default()))
            .unwrap()
            .unwrap();
        assert!(!controller.is_enabled());
        assert!(!job.is_finished());

        let second = controller.export(&view(), Resolution::Svga, &chooser, idle_sink.clone());
        assert!(matches!(second, Err(ExportError::AlreadyRunning)));
        assert!(idle_sink.step_numbers().is_empty());
        assert_eq!(idle_sink.closes.load(Ordering::SeqCst), 0);

        drop(release);
        let deadline = std::time::Instant::now() + Duration::from_secs(10);
        while !job.is_finished() && std::time::Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert!(job.is_finished());
        job.wait().unwrap();

        assert!(controller.is_enabled());
    }

    #[test]
    fn test_storage_failure_is_reported_and_reenables() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller_with(Arc::new(FailingWriter));
        let chooser = FixedChooser::new(Some(dir.path().join("never.png")));
        let sink = Arc::new(RecordingSink::default());

        let job = controller
            .export(&view(), Resolution::Svga, &chooser, sink.clone())
            .unwrap()
            .unwrap();
        let err = job.wait().unwrap_err();

        assert!(matches!(err, ExportError::Storage(StorageError::Io(_))));
        let failure = sink.failure.lock().unwrap().clone().expect("failure reported");
        assert!(failure.contains("disk full"));
        assert_eq!(sink.step_numbers(), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(sink.closes.load(Ordering::SeqCst), 1);
        assert!(controller.is_enabled());
        assert!(!dir.path().join("never.png").exists());
    }

    #[test]
    fn test_panicking_writer_is_reported_and_reenables() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller_with(Arc::new(PanickingWriter));
        let chooser = FixedChooser::new(Some(dir.path().join("never.png")));
        let sink = Arc::new(RecordingSink::default());

        let job = controller
            .export(&view(), Resolution::Svga, &chooser, sink.clone())
            .unwrap()
            .unwrap();
        let err = job.wait().unwrap_err();

        assert!(matches!(err, ExportError::WorkerPanicked("save")));
        let failure = sink.failure.lock().unwrap().clone().expect("failure reported");
        assert_eq!(failure, "export save worker panicked");
        assert_eq!(sink.closes.load(Ordering::SeqCst), 1);
        assert!(controller.is_enabled());
    }

    /// Runs the save stage directly against a hand-made matrix worker, the
    /// way the controller does once a destination has been chosen.
    fn run_save_with(
        matrix_worker: MatrixWorker,
        sink: Arc<RecordingSink>,
    ) -> (ExportController, Result<PathBuf, ExportError>) {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller_with(Arc::new(PngFilePresenter::new()));
        let trigger = TriggerGuard::acquire(&controller.in_flight).unwrap();
        assert!(!controller.is_enabled());

        let request = SaveRequest {
            view_state: view(),
            destination: dir.path().join("never.png"),
            matrix_worker,
            palettes: Arc::clone(&controller.palettes),
            writer: Arc::clone(&controller.writer),
            progress: sink,
        };
        let result = run_save(trigger, request);
        assert!(!dir.path().join("never.png").exists());

        (controller, result)
    }

    #[test]
    fn test_computation_failure_is_reported_and_reenables() {
        let sink = Arc::new(RecordingSink::default());
        let matrix_worker =
            thread::spawn(|| Err(EscapeEngineError::InvalidSize { width: 0, height: 600 }));

        let (controller, result) = run_save_with(matrix_worker, sink.clone());

        assert!(matches!(
            result,
            Err(ExportError::Computation(EscapeEngineError::InvalidSize { width: 0, height: 600 }))
        ));
        let failure = sink.failure.lock().unwrap().clone().expect("failure reported");
        assert!(failure.starts_with("unable to compute export matrix"));
        assert!(failure.contains("raster size must be positive: 0x600"));
        assert_eq!(sink.step_numbers(), vec![3, 4]);
        assert_eq!(sink.closes.load(Ordering::SeqCst), 1);
        assert!(controller.is_enabled());
    }

    #[test]
    fn test_panicking_matrix_worker_is_reported_and_reenables() {
        let sink = Arc::new(RecordingSink::default());
        let matrix_worker: MatrixWorker = thread::spawn(|| panic!("matrix worker failure"));

        let (controller, result) = run_save_with(matrix_worker, sink.clone());

        assert!(matches!(result, Err(ExportError::WorkerPanicked("matrix"))));
        let failure = sink.failure.lock().unwrap().clone().expect("failure reported");
        assert_eq!(failure, "export matrix worker panicked");
        assert_eq!(sink.closes.load(Ordering::SeqCst), 1);
        assert!(controller.is_enabled());
    }

    #[test]
    fn test_export_file_name_uses_six_decimals() {
        let state = ViewState::new(800, 457, 100, -0.75, 0.0, 1.0).unwrap();

        assert_eq!(
            export_file_name(&state, "png"),
            "Mandelbrot_real-0.750000_imag0.000000_zoom1.000000_limit100.png"
        );
    }
}
