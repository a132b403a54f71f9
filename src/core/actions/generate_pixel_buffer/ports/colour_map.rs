use crate::core::data::palette::Palette;

/// Maps an iteration count to a packed opaque colour.
pub trait ColourMap: Sync {
    fn map(&self, iterations: u32) -> u32;
}

impl ColourMap for Palette {
    #[inline]
    fn map(&self, iterations: u32) -> u32 {
        self.colour_for(iterations)
    }
}
