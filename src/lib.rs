mod controllers;
mod core;
mod presenters;
mod storage;

pub use controllers::export::errors::ExportError;
pub use controllers::export::ports::destination::DestinationChooser;
pub use controllers::export::ports::progress::ProgressSink;
pub use controllers::export::{EXPORT_STEPS, ExportController, ExportJob, export_file_name};
pub use controllers::interactive::data::frame_data::{FrameData, format_elapsed};
pub use controllers::interactive::errors::render::RenderError;
pub use controllers::interactive::errors::scheduler::SchedulerError;
pub use controllers::interactive::events::render::RenderEvent;
pub use controllers::interactive::ports::presenter::DisplayPresenterPort;
pub use controllers::interactive::{RenderScheduler, SubmitOutcome};
pub use controllers::ports::file_presenter::FilePresenterPort;

pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    EscapeEngineError, MIN_STEP, compute, generate_fractal_parallel_rayon,
};
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    compose, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::data::colour::{Colour, OPAQUE_ALPHA};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::iteration_matrix::{IterationMatrix, IterationMatrixError};
pub use crate::core::data::palette::{Palette, PaletteError};
pub use crate::core::data::pixel_buffer::{PixelBufferError, RenderedImage};
pub use crate::core::data::resolution::Resolution;
pub use crate::core::data::view_state::{ViewState, ViewStateError, appropriate_height};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::{MANDELBROT_SPAN, MandelbrotAlgorithm};
pub use crate::core::fractals::mandelbrot::colour_map::build_colours;
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{
    ControlLimits, ExplorerConfig, view_state_from_controls,
};
pub use crate::core::fractals::mandelbrot::palette_cache::PaletteCache;

pub use presenters::channel::ChannelPresenter;
pub use presenters::file::directory::DirectoryChooser;
pub use presenters::file::png::PngFilePresenter;
pub use presenters::logging::LogProgressSink;
pub use storage::write_png::{StorageError, write_png};
