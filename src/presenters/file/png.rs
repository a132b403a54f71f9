use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::RenderedImage;
use crate::storage::write_png::{StorageError, write_png};

pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, image: &RenderedImage, filepath: &Path) -> Result<(), StorageError> {
        write_png(image, filepath)
    }

    fn extension(&self) -> &str {
        "png"
    }
}

impl Default for PngFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
