use crate::core::data::palette::Palette;
use crate::core::fractals::mandelbrot::colour_map::build_colours;
use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared palette store keyed by iteration limit.
///
/// Palettes are built outside the lock and only published whole, so a reader
/// never sees a partial table. Two threads missing on the same key may both
/// build it; the first insert wins and both get that copy.
#[derive(Debug, Default)]
pub struct PaletteCache {
    palettes: RwLock<HashMap<u32, Arc<Palette>>>,
}

impl PaletteCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colours_for(&self, max_iterations: u32) -> Arc<Palette> {
        if let Some(palette) = self
            .palettes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&max_iterations)
        {
            return Arc::clone(palette);
        }

        let built = Arc::new(build_colours(max_iterations));
        debug!("built {}-entry palette for limit {}", built.len(), max_iterations);

        let mut palettes = self
            .palettes
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        Arc::clone(palettes.entry(max_iterations).or_insert(built))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.palettes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
