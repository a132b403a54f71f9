use rayon::prelude::*;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::iteration_matrix::IterationMatrix;
use crate::core::data::palette::Palette;
use crate::core::data::pixel_buffer::RenderedImage;

/// Composites an iteration matrix through a palette into a frame of the
/// same dimensions.
#[must_use]
pub fn compose(matrix: IterationMatrix, palette: &Palette) -> RenderedImage {
    generate_pixel_buffer(matrix, palette)
}

/// Maps every cell through `mapper`, reusing the matrix storage for the
/// pixels. Colours are written as-is with no blending.
pub fn generate_pixel_buffer<CMap: ColourMap>(
    matrix: IterationMatrix,
    mapper: &CMap,
) -> RenderedImage {
    let width = matrix.width();
    let height = matrix.height();
    let mut pixels = matrix.into_cells();

    pixels
        .par_iter_mut()
        .for_each(|cell| *cell = mapper.map(*cell));

    RenderedImage::from_parts(width, height, pixels)
}
