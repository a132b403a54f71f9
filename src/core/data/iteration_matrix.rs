use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum IterationMatrixError {
    BoundsMismatch {
        width: u32,
        height: u32,
        cells: usize,
    },
}

impl fmt::Display for IterationMatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                width,
                height,
                cells,
            } => {
                write!(
                    f,
                    "{} cells cannot fill a {}x{} iteration matrix",
                    cells, width, height
                )
            }
        }
    }
}

impl Error for IterationMatrixError {}

/// Row-major escape counts, one per pixel of the requested raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationMatrix {
    width: u32,
    height: u32,
    cells: Vec<u32>,
}

impl IterationMatrix {
    pub fn from_cells(width: u32, height: u32, cells: Vec<u32>) -> Result<Self, IterationMatrixError> {
        if width as usize * height as usize != cells.len() {
            return Err(IterationMatrixError::BoundsMismatch {
                width,
                height,
                cells: cells.len(),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
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
    pub fn get(&self, row: u32, col: u32) -> Option<u32> {
        if row >= self.height || col >= self.width {
            return None;
        }

        self.cells
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }

    #[must_use]
    pub fn row(&self, row: u32) -> Option<&[u32]> {
        self.rows().nth(row as usize)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks_exact(self.width as usize)
    }

    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    #[must_use]
    pub fn into_cells(self) -> Vec<u32> {
        self.cells
    }
}
