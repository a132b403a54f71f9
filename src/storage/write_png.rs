use std::error::Error;
use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::{ImageError, ImageFormat};
use log::debug;
use tempfile::NamedTempFile;

use crate::core::data::pixel_buffer::RenderedImage;

#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Encode(ImageError),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "unable to write image file: {}", err),
            Self::Encode(err) => write!(f, "unable to encode image: {}", err),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ImageError> for StorageError {
    fn from(err: ImageError) -> Self {
        Self::Encode(err)
    }
}

/// Encodes `image` as PNG and moves it into place at `filepath`.
///
/// The bytes go to a temporary file beside the destination first; the
/// destination only ever appears once the encoded file is complete.
pub fn write_png(image: &RenderedImage, filepath: impl AsRef<Path>) -> Result<(), StorageError> {
    let filepath = filepath.as_ref();
    let directory = match filepath.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(directory)?;

    let mut staging = NamedTempFile::new_in(directory)?;
    {
        let mut writer = BufWriter::new(staging.as_file_mut());
        image
            .to_rgba_image()
            .write_to(&mut writer, ImageFormat::Png)?;
        writer.flush()?;
    }
    staging.as_file().sync_all()?;

    staging.persist(filepath).map_err(|err| StorageError::Io(err.error))?;

    debug!(
        "wrote {}x{} png to {}",
        image.width(),
        image.height(),
        filepath.display()
    );

    Ok(())
}
