//! Terminal backend over crossterm.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    queue,
    style::{self, Color as CrosstermColor, Colors, Print, ResetColor, SetColors},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::debug;

use super::{TerminalBackend, TerminalInfo};
use crate::color::BACKEND_CHANNEL_MAX;
use crate::strategy::Slot;

/// Largest palette crossterm can address (`AnsiValue` is a `u8`).
pub const MAX_COLORS: u16 = 256;

/// Slot used as the background of every cell.
const BACKGROUND_SLOT: u8 = 0;

/// Real terminal backend.
///
/// Output is queued into `W` and only reaches the terminal on
/// [`flush`](TerminalBackend::flush). Session state is tracked so that
/// [`end_session`](TerminalBackend::end_session) undoes exactly what was
/// done and is harmless to call twice. Once a size has been forced, output
/// past the logical width is dropped.
pub struct CrosstermBackend<W: Write> {
    writer: W,
    logical_size: Option<(u16, u16)>,
    cursor_col: u16,
    raw_mode: bool,
    alternate_screen: bool,
    keyboard_flags: bool,
    cursor_hidden: bool,
    palette_dirty: bool,
}

impl CrosstermBackend<BufWriter<Stdout>> {
    /// Backend writing to buffered stdout.
    pub fn stdout() -> Self {
        Self::new(BufWriter::new(io::stdout()))
    }
}

impl<W: Write> CrosstermBackend<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            logical_size: None,
            cursor_col: 0,
            raw_mode: false,
            alternate_screen: false,
            keyboard_flags: false,
            cursor_hidden: false,
            palette_dirty: false,
        }
    }

    /// Logical size forced by the display, if any.
    pub fn logical_size(&self) -> Option<(u16, u16)> {
        self.logical_size
    }

    /// The underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Columns left before the logical right edge, if a size was forced.
    fn room(&self) -> Option<usize> {
        self.logical_size
            .map(|(cols, _)| usize::from(cols.saturating_sub(self.cursor_col)))
    }

    fn advance(&mut self, chars: usize) {
        let chars = u16::try_from(chars).unwrap_or(u16::MAX);
        self.cursor_col = self.cursor_col.saturating_add(chars);
    }
}

/// Scale a `[0, 1000]` channel to the 16-bit value OSC 4 expects.
fn osc_channel(c: u16) -> u32 {
    u32::from(c.min(BACKEND_CHANNEL_MAX)) * 0xffff / u32::from(BACKEND_CHANNEL_MAX)
}

/// OSC 4 sequence that sets palette entry `slot`.
pub fn set_palette_sequence(slot: Slot, r: u16, g: u16, b: u16) -> String {
    format!(
        "\x1b]4;{};rgb:{:04x}/{:04x}/{:04x}\x1b\\",
        slot.index(),
        osc_channel(r),
        osc_channel(g),
        osc_channel(b)
    )
}

/// OSC 104 sequence that resets the whole palette to the terminal defaults.
pub const RESET_PALETTE_SEQUENCE: &str = "\x1b]104\x1b\\";

fn ansi_value(slot: Slot) -> CrosstermColor {
    CrosstermColor::AnsiValue(u8::try_from(slot.index()).unwrap_or(u8::MAX))
}

impl<W: Write> TerminalBackend for CrosstermBackend<W> {
    fn info(&self) -> io::Result<TerminalInfo> {
        let (cols, rows) = terminal::size()?;
        let colors = style::available_color_count().min(MAX_COLORS);
        Ok(TerminalInfo { cols, rows, colors })
    }

    fn disable_echo(&mut self) -> io::Result<()> {
        if !self.raw_mode {
            terminal::enable_raw_mode()?;
            self.raw_mode = true;
        }
        Ok(())
    }

    fn enter_fullscreen(&mut self) -> io::Result<()> {
        if !self.alternate_screen {
            queue!(self.writer, EnterAlternateScreen)?;
            self.alternate_screen = true;
        }
        Ok(())
    }

    fn enable_extended_keys(&mut self) -> io::Result<()> {
        // Raw mode already delivers arrow keys; the enhancement flags only
        // disambiguate the rest where the terminal supports them.
        if !self.keyboard_flags && terminal::supports_keyboard_enhancement().unwrap_or(false) {
            queue!(
                self.writer,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )?;
            self.keyboard_flags = true;
        }
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            queue!(self.writer, Show)?;
        } else {
            queue!(self.writer, Hide)?;
        }
        self.cursor_hidden = !visible;
        Ok(())
    }

    fn force_size(&mut self, cols: u16, rows: u16) -> io::Result<()> {
        // Only the logical size changes; the user's window is left alone.
        debug!(cols, rows, "forcing logical size");
        self.logical_size = Some((cols, rows));
        Ok(())
    }

    fn end_session(&mut self) -> io::Result<()> {
        if self.palette_dirty {
            self.writer.write_all(RESET_PALETTE_SEQUENCE.as_bytes())?;
            self.palette_dirty = false;
        }
        queue!(self.writer, ResetColor)?;
        if self.cursor_hidden {
            queue!(self.writer, Show)?;
            self.cursor_hidden = false;
        }
        if self.keyboard_flags {
            queue!(self.writer, PopKeyboardEnhancementFlags)?;
            self.keyboard_flags = false;
        }
        if self.alternate_screen {
            queue!(self.writer, LeaveAlternateScreen)?;
            self.alternate_screen = false;
        }
        self.writer.flush()?;
        if self.raw_mode {
            terminal::disable_raw_mode()?;
            self.raw_mode = false;
        }
        debug!("terminal session ended");
        Ok(())
    }

    fn set_color(&mut self, slot: Slot) -> io::Result<()> {
        queue!(
            self.writer,
            SetColors(Colors::new(
                ansi_value(slot),
                CrosstermColor::AnsiValue(BACKGROUND_SLOT)
            ))
        )
    }

    fn move_to(&mut self, row: u16, col: u16) -> io::Result<()> {
        queue!(self.writer, MoveTo(col, row))?;
        self.cursor_col = col;
        Ok(())
    }

    fn write_char(&mut self, ch: char) -> io::Result<()> {
        if self.room() != Some(0) {
            queue!(self.writer, Print(ch))?;
        }
        self.advance(1);
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        let count = s.chars().count();
        match self.room() {
            Some(room) if room < count => {
                let visible: String = s.chars().take(room).collect();
                if !visible.is_empty() {
                    queue!(self.writer, Print(visible))?;
                }
            }
            _ => queue!(self.writer, Print(s))?,
        }
        self.advance(count);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn init_color(&mut self, slot: Slot, r: u16, g: u16, b: u16) -> io::Result<()> {
        self.writer
            .write_all(set_palette_sequence(slot, r, g, b).as_bytes())?;
        self.palette_dirty = true;
        Ok(())
    }
}
