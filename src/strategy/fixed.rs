//! Fixed-palette strategy for terminals that cannot reprogram colors.

use super::{nearest, ColorMode, ColorStrategy, PaletteProgrammer, Slot};
use crate::color::Color;

/// The eight base ANSI colors at VGA levels, in slot order.
pub const ANSI_BASE: [Color; 8] = [
    Color::new(0, 0, 0),
    Color::new(170, 0, 0),
    Color::new(0, 170, 0),
    Color::new(170, 85, 0),
    Color::new(0, 0, 170),
    Color::new(170, 0, 170),
    Color::new(0, 170, 170),
    Color::new(170, 170, 170),
];

/// The bright variants, slots 8 through 15.
pub const ANSI_BRIGHT: [Color; 8] = [
    Color::new(85, 85, 85),
    Color::new(255, 85, 85),
    Color::new(85, 255, 85),
    Color::new(255, 255, 85),
    Color::new(85, 85, 255),
    Color::new(255, 85, 255),
    Color::new(85, 255, 255),
    Color::new(255, 255, 255),
];

/// Picks the nearest of a fixed set of colors.
///
/// The set is decided at construction and never changes. Lookups are pure:
/// the palette is never programmed.
#[derive(Debug, Clone)]
pub struct FixedPaletteStrategy {
    entries: Vec<(Color, Slot)>,
}

impl FixedPaletteStrategy {
    /// Build from explicit `(color, slot)` pairs.
    ///
    /// An empty list falls back to black in slot 0 so lookups stay total.
    pub fn new(entries: Vec<(Color, Slot)>) -> Self {
        if entries.is_empty() {
            return Self {
                entries: vec![(Color::BLACK, Slot(0))],
            };
        }
        Self { entries }
    }

    /// The eight base ANSI colors in slots 0-7.
    pub fn ansi8() -> Self {
        Self::new(numbered(ANSI_BASE.iter()))
    }

    /// Base and bright ANSI colors in slots 0-15.
    pub fn ansi16() -> Self {
        Self::new(numbered(ANSI_BASE.iter().chain(ANSI_BRIGHT.iter())))
    }

    /// The standard set that fits a terminal with `colors` slots.
    pub fn for_slot_count(colors: u16) -> Self {
        if colors >= 16 {
            return Self::ansi16();
        }
        let entries = numbered(ANSI_BASE.iter())
            .into_iter()
            .filter(|(_, slot)| slot.index() < colors)
            .collect();
        Self::new(entries)
    }

    pub fn entries(&self) -> &[(Color, Slot)] {
        &self.entries
    }

    /// The fixed color assigned to `slot`, if any.
    pub fn color_of(&self, slot: Slot) -> Option<Color> {
        self.entries
            .iter()
            .find(|(_, s)| *s == slot)
            .map(|(c, _)| *c)
    }

    /// Nearest slot to `color`. Ties go to the lowest slot index.
    pub fn lookup(&self, color: Color) -> Slot {
        nearest(color, self.entries.iter().map(|(c, s)| (c, s))).unwrap_or_default()
    }
}

fn numbered<'a>(colors: impl Iterator<Item = &'a Color>) -> Vec<(Color, Slot)> {
    colors
        .zip(0u16..)
        .map(|(color, index)| (*color, Slot(index)))
        .collect()
}

impl ColorStrategy for FixedPaletteStrategy {
    fn mode(&self) -> ColorMode {
        ColorMode::Fixed
    }

    fn slot_for(
        &mut self,
        color: Color,
        _palette: &mut dyn PaletteProgrammer,
    ) -> std::io::Result<Slot> {
        Ok(self.lookup(color))
    }
}
