use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaletteError {
    Empty,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "palette must contain at least one colour"),
        }
    }
}

impl Error for PaletteError {}

/// Iteration-count to colour lookup table of packed `0xAARRGGBB` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<u32>,
}

impl Palette {
    pub fn from_colours(colours: Vec<u32>) -> Result<Self, PaletteError> {
        if colours.is_empty() {
            return Err(PaletteError::Empty);
        }

        Ok(Self { colours })
    }

    /// For generators that always produce at least one entry.
    pub(crate) fn from_generated(colours: Vec<u32>) -> Self {
        debug_assert!(!colours.is_empty());
        Self { colours }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Colour for an iteration count. Indexes modulo the palette length so a
    /// matrix computed with a different limit still maps to a valid entry.
    #[inline]
    #[must_use]
    pub fn colour_for(&self, iterations: u32) -> u32 {
        self.colours[iterations as usize % self.colours.len()]
    }

    #[must_use]
    pub fn colours(&self) -> &[u32] {
        &self.colours
    }
}
