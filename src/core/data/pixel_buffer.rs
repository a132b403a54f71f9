use crate::core::data::colour::Colour;
use image::RgbaImage;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel rect size {} does not match buffer size {}",
                    pixel_rect_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u32>;

/// A finished frame: one packed `0xAARRGGBB` pixel per matrix cell, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    width: u32,
    height: u32,
    pixels: PixelBufferData,
}

impl RenderedImage {
    pub fn from_data(
        width: u32,
        height: u32,
        pixels: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let pixel_rect_size = width as usize * height as usize;

        if pixel_rect_size != pixels.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size,
                buffer_size: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// For producers that size the buffer from the same dimensions.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: PixelBufferData) -> Self {
        debug_assert_eq!(width as usize * height as usize, pixels.len());
        Self {
            width,
            height,
            pixels,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel(&self, row: u32, col: u32) -> Option<u32> {
        if row >= self.height || col >= self.width {
            return None;
        }

        self.pixels
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }

    /// Unpacks into an RGBA raster for encoding.
    #[must_use]
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let argb = self.pixels[y as usize * self.width as usize + x as usize];
            let Colour { r, g, b } = Colour::from_argb(argb);
            image::Rgba([r, g, b, (argb >> 24) as u8])
        })
    }
}
