//! Direct-color strategy: program one palette slot per distinct color.

use std::collections::HashMap;

use tracing::{trace, warn};

use super::{nearest, ColorMode, ColorStrategy, PaletteProgrammer, Slot};
use crate::color::Color;

/// Allocates palette slots on demand and programs them with the requested
/// color.
///
/// Slots are handed out in increasing order starting after the reserved
/// ones. A color keeps its slot for the lifetime of the strategy. Once every
/// slot has been programmed, new colors reuse the slot of the nearest color
/// already programmed; nothing is ever reprogrammed.
#[derive(Debug)]
pub struct DirectColorStrategy {
    palette_size: u16,
    reserved: u16,
    next: u16,
    cache: HashMap<Color, Slot>,
    /// Colors actually written to the palette, in slot order.
    programmed: Vec<(Color, Slot)>,
    exhausted_logged: bool,
}

impl DirectColorStrategy {
    /// Create a strategy for a palette of `palette_size` slots, never
    /// touching the first `reserved` of them.
    ///
    /// `reserved` is clamped so that at least one slot stays programmable.
    pub fn new(palette_size: u16, reserved: u16) -> Self {
        let palette_size = palette_size.max(1);
        let reserved = reserved.min(palette_size - 1);
        Self {
            palette_size,
            reserved,
            next: reserved,
            cache: HashMap::new(),
            programmed: Vec::new(),
            exhausted_logged: false,
        }
    }

    /// Number of slots this strategy may program.
    pub fn capacity(&self) -> usize {
        usize::from(self.palette_size - self.reserved)
    }

    /// Number of slots programmed so far.
    pub fn programmed_count(&self) -> usize {
        self.programmed.len()
    }

    /// First slot the allocator hands out.
    pub fn first_slot(&self) -> Slot {
        Slot(self.reserved)
    }

    /// Whether every programmable slot is in use.
    pub fn is_exhausted(&self) -> bool {
        self.next >= self.palette_size
    }

    /// The slot `color` is cached under, if it has been requested before.
    pub fn cached(&self, color: Color) -> Option<Slot> {
        self.cache.get(&color).copied()
    }

    fn reuse_nearest(&mut self, color: Color) -> Slot {
        if !self.exhausted_logged {
            warn!(
                slots = self.capacity(),
                "palette exhausted; new colors reuse the nearest programmed slot"
            );
            self.exhausted_logged = true;
        }
        let slot = nearest(color, self.programmed.iter().map(|(c, s)| (c, s)))
            .unwrap_or(Slot(self.reserved));
        self.cache.insert(color, slot);
        slot
    }
}

impl ColorStrategy for DirectColorStrategy {
    fn mode(&self) -> ColorMode {
        ColorMode::Direct
    }

    fn slot_for(
        &mut self,
        color: Color,
        palette: &mut dyn PaletteProgrammer,
    ) -> std::io::Result<Slot> {
        if let Some(slot) = self.cache.get(&color) {
            return Ok(*slot);
        }

        if self.is_exhausted() {
            return Ok(self.reuse_nearest(color));
        }

        let slot = Slot(self.next);
        palette.program(slot, color)?;
        trace!(%slot, %color, "programmed palette slot");

        self.next += 1;
        self.cache.insert(color, slot);
        self.programmed.push((color, slot));
        Ok(slot)
    }
}
