/// An opaque RGB colour. Palettes store colours packed as `0xAARRGGBB`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const OPAQUE_ALPHA: u32 = 0xFF00_0000;

impl Colour {
    #[must_use]
    pub fn to_argb(self) -> u32 {
        OPAQUE_ALPHA | (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    #[must_use]
    pub fn from_argb(argb: u32) -> Self {
        Self {
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Converts hue, saturation and brightness (each nominally in `0.0..=1.0`)
    /// using the six-sector HSB model.
    #[must_use]
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        let channel = |value: f32| (value * 255.0 + 0.5).clamp(0.0, 255.0) as u8;

        if saturation == 0.0 {
            let grey = channel(brightness);
            return Self {
                r: grey,
                g: grey,
                b: grey,
            };
        }

        let h = (hue - hue.floor()) * 6.0;
        let f = h - h.floor();
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));

        let (r, g, b) = match h as u32 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            _ => (brightness, p, q),
        };

        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }

    /// The largest channel, which for a fully saturated colour is its brightness.
    #[must_use]
    pub fn max_channel(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }
}
