use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;

/// Builds the `max_iterations + 1` entry spiral palette.
///
/// Counting down from the limit, hue cycles every `sqrt(limit)` entries while
/// brightness ramps linearly, so quickly escaping points are bright and the
/// entry at `max_iterations` (points presumed in the set) is black.
#[must_use]
pub fn build_colours(max_iterations: u32) -> Palette {
    let root = f64::from(max_iterations).sqrt() as f32;

    let colours = (0..=max_iterations)
        .map(|count| {
            let inverted = (max_iterations - count) as f32;
            let hue = (inverted % root) / root;
            let brightness = (inverted / root) / root;

            Colour::from_hsb(hue, 1.0, brightness).to_argb()
        })
        .collect();

    Palette::from_generated(colours)
}
