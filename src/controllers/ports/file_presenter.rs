use std::path::Path;

use crate::core::data::pixel_buffer::RenderedImage;
use crate::storage::write_png::StorageError;

/// Persists a finished image. Called from export worker threads.
pub trait FilePresenterPort: Send + Sync {
    fn present(&self, image: &RenderedImage, filepath: &Path) -> Result<(), StorageError>;

    /// File extension, without the dot, of what `present` writes.
    fn extension(&self) -> &str;
}
