//! Fixed-size display surface.
//!
//! [`Display`] presents an 80x24 character grid regardless of the physical
//! terminal size, and accepts RGB colors regardless of the terminal's color
//! depth. Colors are resolved to palette slots by the strategy chosen at
//! construction.
//!
//! # Example
//!
//! ```ignore
//! use gridterm::{Color, Config, TerminalDisplay};
//!
//! let mut display = TerminalDisplay::open(&Config::load()?)?;
//! display.draw(0, 0, "@", Color::new(255, 128, 0))?;
//! display.update()?;
//! display.destroy()?;
//! ```

use std::io::{self, BufWriter, Stdout};

use tracing::{debug, info};

use crate::backend::{CrosstermBackend, TerminalBackend, TerminalInfo};
use crate::color::Color;
use crate::config::{Config, DisplayConfig};
use crate::error::{Axis, DisplayError};
use crate::session::EnvOverride;
use crate::strategy::{self, ColorMode, ColorStrategy, PaletteProgrammer, Slot};

/// Logical width in columns.
pub const WIDTH: u16 = 80;

/// Logical height in rows.
pub const HEIGHT: u16 = 24;

/// A display on the real terminal.
pub type TerminalDisplay = Display<CrosstermBackend<BufWriter<Stdout>>>;

/// Fixed 80x24 grid drawn through a terminal backend.
///
/// Draws are batched: nothing is guaranteed to be visible until
/// [`update`](Display::update). Dropping the display ends the terminal
/// session; [`destroy`](Display::destroy) does the same but reports errors.
pub struct Display<B: TerminalBackend> {
    backend: B,
    strategy: Box<dyn ColorStrategy>,
    info: TerminalInfo,
    active: bool,
}

/// Programs palette slots on a backend.
///
/// Handed to the color strategy for each lookup so the strategy never needs
/// the display itself.
struct BackendPalette<'a, B: TerminalBackend>(&'a mut B);

impl<B: TerminalBackend> PaletteProgrammer for BackendPalette<'_, B> {
    fn program(&mut self, slot: Slot, color: Color) -> io::Result<()> {
        program_slot(&mut *self.0, slot, color)
    }
}

fn program_slot<B: TerminalBackend>(backend: &mut B, slot: Slot, color: Color) -> io::Result<()> {
    let (r, g, b) = color.to_backend_channels();
    backend.init_color(slot, r, g, b)
}

fn start_session<B: TerminalBackend>(backend: &mut B, config: &DisplayConfig) -> io::Result<()> {
    backend.disable_echo()?;
    backend.enter_fullscreen()?;
    if config.extended_keys {
        backend.enable_extended_keys()?;
    }
    if config.hide_cursor {
        backend.set_cursor_visible(false)?;
    }
    backend.force_size(WIDTH, HEIGHT)
}

/// Map a logical coordinate onto `[0, limit)`.
fn in_range(value: i32, limit: u16) -> Option<u16> {
    u16::try_from(value).ok().filter(|v| *v < limit)
}

impl TerminalDisplay {
    /// Open a display on the real terminal.
    ///
    /// The configured `TERM` override is in effect only while the terminal
    /// is probed and the session started.
    pub fn open(config: &Config) -> Result<Self, DisplayError> {
        let _term = EnvOverride::term(config.session.term_override());
        Display::new(CrosstermBackend::stdout(), config)
    }

    /// Report what the real terminal supports and which color mode it would
    /// get, without starting a session.
    pub fn probe(config: &Config) -> Result<(TerminalInfo, ColorMode), DisplayError> {
        let _term = EnvOverride::term(config.session.term_override());
        let info = CrosstermBackend::stdout().info()?;
        let mode = strategy::mode_for(info.colors, &config.palette.strategy_options());
        Ok((info, mode))
    }
}

impl<B: TerminalBackend> Display<B> {
    /// Start a display session on `backend`.
    ///
    /// Fails with [`DisplayError::Initialization`] if the terminal is smaller
    /// than 80x24. Otherwise the backend is put into full-screen, no-echo
    /// mode with its logical size forced to 80x24, and the color strategy is
    /// picked from the reported palette size.
    pub fn new(mut backend: B, config: &Config) -> Result<Self, DisplayError> {
        let info = backend.info()?;
        info!(
            "Running at {}x{} with {} colours",
            info.cols, info.rows, info.colors
        );

        if info.cols < WIDTH || info.rows < HEIGHT {
            return Err(DisplayError::Initialization {
                required_cols: WIDTH,
                required_rows: HEIGHT,
                actual_cols: info.cols,
                actual_rows: info.rows,
            });
        }

        if let Err(e) = start_session(&mut backend, &config.display) {
            let _ = backend.end_session();
            return Err(e.into());
        }

        let strategy = strategy::select(info.colors, &config.palette.strategy_options());
        debug!(mode = %strategy.mode(), "selected color strategy");

        Ok(Self {
            backend,
            strategy,
            info,
            active: true,
        })
    }

    /// Start a display with the default configuration.
    pub fn with_defaults(backend: B) -> Result<Self, DisplayError> {
        Self::new(backend, &Config::default())
    }

    pub fn width(&self) -> u16 {
        WIDTH
    }

    pub fn height(&self) -> u16 {
        HEIGHT
    }

    /// Physical size and palette size reported at construction.
    pub fn terminal_info(&self) -> TerminalInfo {
        self.info
    }

    pub fn color_mode(&self) -> ColorMode {
        self.strategy.mode()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Draw `glyph` at `(x, y)` in `color`.
    ///
    /// Empty glyphs are ignored. Nothing becomes visible until
    /// [`update`](Self::update).
    pub fn draw(&mut self, x: i32, y: i32, glyph: &str, color: Color) -> Result<(), DisplayError> {
        if glyph.is_empty() {
            return Ok(());
        }
        let coordinate_error = |axis| DisplayError::Coordinate {
            x,
            y,
            glyph: glyph.to_string(),
            axis,
        };
        let col = in_range(x, WIDTH).ok_or_else(|| coordinate_error(Axis::X))?;
        let row = in_range(y, HEIGHT).ok_or_else(|| coordinate_error(Axis::Y))?;

        let slot = self.slot_for(color)?;
        self.backend.set_color(slot)?;
        self.backend.move_to(row, col)?;

        // The single-character path is roughly twice as fast.
        let mut chars = glyph.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => self.backend.write_char(ch)?,
            _ => self.backend.write_str(glyph)?,
        }
        Ok(())
    }

    /// Flush pending draws to the screen.
    pub fn update(&mut self) -> Result<(), DisplayError> {
        self.backend.flush()?;
        Ok(())
    }

    /// Blank the whole grid.
    pub fn clear(&mut self) -> Result<(), DisplayError> {
        self.fill_screen(" ", Color::BLACK)
    }

    /// Draw `glyph` in every cell, then update.
    pub fn fill_screen(&mut self, glyph: &str, color: Color) -> Result<(), DisplayError> {
        for x in 0..i32::from(WIDTH) {
            for y in 0..i32::from(HEIGHT) {
                self.draw(x, y, glyph, color)?;
            }
        }
        self.update()
    }

    /// The slot `color` resolves to, programming the palette if needed.
    pub fn slot_for(&mut self, color: Color) -> Result<Slot, DisplayError> {
        let mut palette = BackendPalette(&mut self.backend);
        Ok(self.strategy.slot_for(color, &mut palette)?)
    }

    /// Program palette `slot` with `color`.
    ///
    /// Channels are scaled to the backend's `[0, 1000]` range. Only
    /// meaningful in direct-color mode; the strategy calls this itself.
    pub fn set_palette_entry(&mut self, slot: Slot, color: Color) -> Result<(), DisplayError> {
        program_slot(&mut self.backend, slot, color)?;
        Ok(())
    }

    /// End the terminal session and restore the terminal.
    pub fn destroy(mut self) -> Result<(), DisplayError> {
        info!("Terminating display.");
        self.active = false;
        self.backend.end_session()?;
        Ok(())
    }
}

impl<B: TerminalBackend> Drop for Display<B> {
    fn drop(&mut self) {
        if self.active {
            debug!("display dropped without destroy; ending session");
            let _ = self.backend.end_session();
        }
    }
}
