//! Drawing command handlers (fill, gradient, palette)

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use gridterm::{demo, Color, Config, DisplayError, TerminalDisplay};

/// Fill the screen with one glyph in one color.
#[cfg(not(tarpaulin_include))]
pub fn handle_fill(config: &Config, glyph: &str, color: Color) -> Result<()> {
    validate_glyph(glyph)?;
    run_scene(config, |display| demo::fill(display, glyph, color))
}

#[cfg(not(tarpaulin_include))]
pub fn handle_gradient(config: &Config) -> Result<()> {
    run_scene(config, demo::gradient)
}

#[cfg(not(tarpaulin_include))]
pub fn handle_palette(config: &Config) -> Result<()> {
    run_scene(config, demo::palette)
}

/// A fill glyph must occupy exactly one cell.
pub(crate) fn validate_glyph(glyph: &str) -> Result<()> {
    if glyph.chars().count() != 1 {
        bail!("--glyph must be a single character, got {:?}", glyph);
    }
    Ok(())
}

/// Open the display, draw `scene`, wait for a key and restore the terminal.
#[cfg(not(tarpaulin_include))]
fn run_scene<F>(config: &Config, scene: F) -> Result<()>
where
    F: FnOnce(&mut TerminalDisplay) -> Result<(), DisplayError>,
{
    if !atty::is(atty::Stream::Stdout) {
        bail!("gridterm needs an interactive terminal on stdout");
    }

    let mut display = TerminalDisplay::open(config).context("Failed to open display")?;
    scene(&mut display).context("Failed to draw")?;
    let waited = wait_for_key();
    display.destroy().context("Failed to restore terminal")?;
    waited
}

/// Block until a key is pressed.
#[cfg(not(tarpaulin_include))]
fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read().context("Failed to read terminal event")? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
