use std::fmt;

/// The fixed catalogue of raster sizes offered for export.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Resolution {
    Svga,
    Hd720,
    Hd900,
    Hd1080,
    Uhd4k,
    Crazy8k,
}

impl Resolution {
    pub const ALL: [Resolution; 6] = [
        Resolution::Svga,
        Resolution::Hd720,
        Resolution::Hd900,
        Resolution::Hd1080,
        Resolution::Uhd4k,
        Resolution::Crazy8k,
    ];

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.dimensions().0
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.dimensions().1
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Svga => "SVGA",
            Self::Hd720 => "HD 720",
            Self::Hd900 => "HD+",
            Self::Hd1080 => "HD 1080",
            Self::Uhd4k => "UHD 4K",
            Self::Crazy8k => "Crazy 8K",
        }
    }

    fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Svga => (800, 600),
            Self::Hd720 => (1280, 720),
            Self::Hd900 => (1600, 900),
            Self::Hd1080 => (1920, 1080),
            Self::Uhd4k => (4096, 2304),
            Self::Crazy8k => (8192, 4608),
        }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::Svga
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} x {})",
            self.display_name(),
            self.width(),
            self.height()
        )
    }
}
