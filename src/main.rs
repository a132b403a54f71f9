use std::path::Path;
use std::sync::Arc;

use log::{error, info};
use mandelbrot_navigator::{
    ChannelPresenter, DirectoryChooser, ExplorerConfig, ExportController, LogProgressSink,
    PaletteCache, PngFilePresenter, RenderEvent, RenderScheduler, SchedulerError,
};

const DEFAULT_OUTPUT_DIR: &str = "output";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());

    run(Path::new(&output_dir))
}

/// Renders the initial view once through the scheduler, then exports it at
/// the configured resolution into `output_dir`.
fn run(output_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = ExplorerConfig::default();
    let palettes = Arc::new(PaletteCache::new());
    let view_state = config.initial_view_state()?;

    let (display, events) = ChannelPresenter::new();
    let mut scheduler = RenderScheduler::new(Arc::new(display), Arc::clone(&palettes))?;
    match scheduler.submit(view_state) {
        Ok(_) => {}
        Err(SchedulerError::QueueClosed) => {
            // The worker is gone; nothing further can be rendered.
            error!("render worker is no longer accepting view states");
            return Err(SchedulerError::QueueClosed.into());
        }
        Err(err) => return Err(err.into()),
    }

    for event in events.iter() {
        match event {
            RenderEvent::Frame(frame) => {
                info!(
                    "previewed {}x{} in {}",
                    frame.image.width(),
                    frame.image.height(),
                    frame.elapsed_label()
                );
                break;
            }
            RenderEvent::Error(err) => return Err(err.into()),
            RenderEvent::Started(_) | RenderEvent::Idle => {}
        }
    }
    scheduler.shutdown();

    let exporter = ExportController::new(palettes, Arc::new(PngFilePresenter::new()));
    let chooser = DirectoryChooser::new(output_dir);
    let job = exporter.export(
        &view_state,
        config.export_resolution,
        &chooser,
        Arc::new(LogProgressSink::new()),
    )?;

    if let Some(job) = job {
        let path = job.wait()?;
        println!("Saved to {}", path.display());
    }

    Ok(())
}
