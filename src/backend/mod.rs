//! Terminal backends.
//!
//! The display talks to the terminal only through [`TerminalBackend`]. Two
//! implementations ship with the crate:
//!
//! - [`CrosstermBackend`]: the real terminal, via crossterm.
//! - [`MemoryBackend`]: an in-memory grid that records every call, for tests
//!   and headless hosts.

pub mod crossterm;
pub mod memory;

pub use self::crossterm::CrosstermBackend;
pub use self::memory::MemoryBackend;

use std::io;

use crate::strategy::Slot;

/// What the terminal reports about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalInfo {
    /// Physical width in columns.
    pub cols: u16,
    /// Physical height in rows.
    pub rows: u16,
    /// Number of palette slots available.
    pub colors: u16,
}

/// Operations the display needs from a terminal.
///
/// Coordinates are backend order: `(row, col)`. Palette channels are in
/// `[0, 1000]`.
pub trait TerminalBackend {
    /// Report physical size and palette size.
    fn info(&self) -> io::Result<TerminalInfo>;

    // Session control

    /// Stop echoing typed keys.
    fn disable_echo(&mut self) -> io::Result<()>;

    /// Take over the whole screen.
    fn enter_fullscreen(&mut self) -> io::Result<()>;

    /// Report arrow keys and other extended keys as distinct events.
    fn enable_extended_keys(&mut self) -> io::Result<()>;

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    /// Make the logical screen `cols` x `rows` regardless of physical size.
    fn force_size(&mut self, cols: u16, rows: u16) -> io::Result<()>;

    /// Restore the terminal to the state it was in before the session.
    fn end_session(&mut self) -> io::Result<()>;

    // Rendering

    /// Make `slot` the color used by subsequent writes.
    fn set_color(&mut self, slot: Slot) -> io::Result<()>;

    fn move_to(&mut self, row: u16, col: u16) -> io::Result<()>;

    /// Write a single character. Cheaper than [`write_str`](Self::write_str).
    fn write_char(&mut self, ch: char) -> io::Result<()>;

    fn write_str(&mut self, s: &str) -> io::Result<()>;

    /// Push everything written so far to the screen.
    fn flush(&mut self) -> io::Result<()>;

    // Palette

    /// Program palette `slot` with channels in `[0, 1000]`.
    fn init_color(&mut self, slot: Slot, r: u16, g: u16, b: u16) -> io::Result<()>;
}

impl<B: TerminalBackend + ?Sized> TerminalBackend for &mut B {
    fn info(&self) -> io::Result<TerminalInfo> {
        (**self).info()
    }

    fn disable_echo(&mut self) -> io::Result<()> {
        (**self).disable_echo()
    }

    fn enter_fullscreen(&mut self) -> io::Result<()> {
        (**self).enter_fullscreen()
    }

    fn enable_extended_keys(&mut self) -> io::Result<()> {
        (**self).enable_extended_keys()
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        (**self).set_cursor_visible(visible)
    }

    fn force_size(&mut self, cols: u16, rows: u16) -> io::Result<()> {
        (**self).force_size(cols, rows)
    }

    fn end_session(&mut self) -> io::Result<()> {
        (**self).end_session()
    }

    fn set_color(&mut self, slot: Slot) -> io::Result<()> {
        (**self).set_color(slot)
    }

    fn move_to(&mut self, row: u16, col: u16) -> io::Result<()> {
        (**self).move_to(row, col)
    }

    fn write_char(&mut self, ch: char) -> io::Result<()> {
        (**self).write_char(ch)
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        (**self).write_str(s)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    fn init_color(&mut self, slot: Slot, r: u16, g: u16, b: u16) -> io::Result<()> {
        (**self).init_color(slot, r, g, b)
    }
}
