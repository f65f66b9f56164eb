//! RGB color value type.
//!
//! Callers always describe colors as 24-bit RGB. Strategies degrade them
//! into whatever the terminal palette can represent.

use std::fmt;

/// Largest channel value the terminal backend accepts when programming a
/// palette entry.
pub const BACKEND_CHANNEL_MAX: u16 = 1000;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(170, 0, 0);
    pub const GREEN: Color = Color::new(0, 170, 0);
    pub const YELLOW: Color = Color::new(170, 85, 0);
    pub const BLUE: Color = Color::new(0, 0, 170);
    pub const MAGENTA: Color = Color::new(170, 0, 170);
    pub const CYAN: Color = Color::new(0, 170, 170);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Squared Euclidean distance between two colors in the RGB cube.
    ///
    /// Used for nearest-match lookups. The square root is never needed since
    /// only the ordering of distances matters.
    pub fn distance_sq(self, other: Color) -> u32 {
        let dr = u32::from(self.r.abs_diff(other.r));
        let dg = u32::from(self.g.abs_diff(other.g));
        let db = u32::from(self.b.abs_diff(other.b));
        dr * dr + dg * dg + db * db
    }

    /// Channels scaled from `[0, 255]` to the backend's `[0, 1000]` range.
    pub fn to_backend_channels(self) -> (u16, u16, u16) {
        (
            scale_channel(self.r),
            scale_channel(self.g),
            scale_channel(self.b),
        )
    }

    /// Parse `"r,g,b"` (decimal) or `"#rrggbb"` (hex).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return None;
            }
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Self::new(r, g, b));
        }

        let mut parts = s.split(',').map(|p| p.trim().parse::<u8>());
        let r = parts.next()?.ok()?;
        let g = parts.next()?.ok()?;
        let b = parts.next()?.ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(r, g, b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Map a `[0, 255]` channel onto `[0, 1000]` by multiplying by 4.
///
/// 255 * 4 is 1020, so the top of the range clamps rather than wraps.
fn scale_channel(c: u8) -> u16 {
    (u16::from(c) * 4).min(BACKEND_CHANNEL_MAX)
}
