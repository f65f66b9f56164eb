//! Color strategies.
//!
//! A strategy turns an RGB [`Color`] into a palette [`Slot`] the terminal can
//! render. Which strategy is used is decided once, when the display is
//! constructed, from the number of palette slots the terminal reports:
//!
//! - [`DirectColorStrategy`]: many slots, reprogrammable. Each new color gets
//!   its own slot, programmed on first use.
//! - [`FixedPaletteStrategy`]: few slots, fixed. Each color maps to the
//!   nearest of the predefined colors.

pub mod direct;
pub mod fixed;

pub use direct::DirectColorStrategy;
pub use fixed::FixedPaletteStrategy;

use std::fmt;

use crate::color::Color;

/// Index into the terminal's color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Slot(pub u16);

impl Slot {
    pub fn index(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Capability to program a palette slot with an RGB value.
///
/// This is all a strategy may do to the terminal. The display hands one in
/// for every lookup so the strategy never holds on to the display itself.
pub trait PaletteProgrammer {
    fn program(&mut self, slot: Slot, color: Color) -> std::io::Result<()>;
}

/// Maps RGB colors to palette slots.
pub trait ColorStrategy {
    /// Which mode this strategy implements.
    fn mode(&self) -> ColorMode;

    /// Resolve `color` to a slot, programming the palette if needed.
    ///
    /// Always returns a valid slot. A failure to program the palette is
    /// returned as an error; the strategy state is left unchanged in that
    /// case so the next call retries.
    fn slot_for(
        &mut self,
        color: Color,
        palette: &mut dyn PaletteProgrammer,
    ) -> std::io::Result<Slot>;
}

/// The two color modes a display can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Palette slots are reprogrammed on demand.
    Direct,
    /// Colors are matched against a fixed palette.
    Fixed,
}

impl ColorMode {
    pub fn name(&self) -> &'static str {
        match self {
            ColorMode::Direct => "direct",
            ColorMode::Fixed => "fixed",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options that shape strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyOptions {
    /// Direct-color is selected when the slot count is strictly greater.
    pub direct_color_threshold: u16,
    /// Low slots the direct-color allocator must never hand out.
    pub reserved_slots: u16,
}

impl Default for StrategyOptions {
    fn default() -> Self {
        Self {
            direct_color_threshold: 16,
            reserved_slots: 16,
        }
    }
}

/// Which mode a terminal with `colors` palette slots gets.
pub fn mode_for(colors: u16, options: &StrategyOptions) -> ColorMode {
    if colors > options.direct_color_threshold {
        ColorMode::Direct
    } else {
        ColorMode::Fixed
    }
}

/// Build the strategy for a terminal with `colors` palette slots.
pub fn select(colors: u16, options: &StrategyOptions) -> Box<dyn ColorStrategy> {
    match mode_for(colors, options) {
        ColorMode::Direct => Box::new(DirectColorStrategy::new(colors, options.reserved_slots)),
        ColorMode::Fixed => Box::new(FixedPaletteStrategy::for_slot_count(colors)),
    }
}

/// Index of the entry nearest to `color`, ties going to the lowest slot.
pub(crate) fn nearest<'a, I>(color: Color, entries: I) -> Option<Slot>
where
    I: IntoIterator<Item = (&'a Color, &'a Slot)>,
{
    entries
        .into_iter()
        .min_by_key(|(candidate, slot)| (color.distance_sq(**candidate), **slot))
        .map(|(_, slot)| *slot)
}
