//! Scenes drawn by the gridterm binary.
//!
//! Each scene draws through any [`Display`], so they run the same against the
//! real terminal and [`MemoryBackend`](crate::backend::MemoryBackend).

use crate::backend::TerminalBackend;
use crate::color::Color;
use crate::display::{Display, WIDTH};
use crate::error::DisplayError;
use crate::strategy::fixed::{ANSI_BASE, ANSI_BRIGHT};

/// Columns per gradient step.
const GRADIENT_COL_STEP: u16 = 5;

/// Rows per gradient step.
const GRADIENT_ROW_STEP: u16 = 3;

/// Width of one palette swatch, label included.
const SWATCH_WIDTH: u16 = 10;

/// Rows of solid color in one palette swatch.
const SWATCH_ROWS: u16 = 8;

const SWATCH_GLYPH: &str = "████████";

/// Draw `text` starting at `(x, y)`, cut off at the right edge.
pub fn draw_text<B: TerminalBackend>(
    display: &mut Display<B>,
    x: u16,
    y: u16,
    text: &str,
    color: Color,
) -> Result<(), DisplayError> {
    let room = usize::from(WIDTH.saturating_sub(x));
    let visible: String = text.chars().take(room).collect();
    display.draw(i32::from(x), i32::from(y), &visible, color)
}

/// Color of the gradient at cell `(x, y)`.
///
/// Quantized to 16 red steps by 8 green steps so the whole gradient fits a
/// 256-color palette without running out of slots.
pub fn gradient_color(x: u16, y: u16) -> Color {
    let r = (x / GRADIENT_COL_STEP).min(15) * 17;
    let g = (y / GRADIENT_ROW_STEP).min(7) * 255 / 7;
    let b = 255 - r / 2;
    Color::new(r as u8, g as u8, b as u8)
}

/// Fill the grid with a red/green gradient, then update.
pub fn gradient<B: TerminalBackend>(display: &mut Display<B>) -> Result<(), DisplayError> {
    for y in 0..display.height() {
        for x in 0..display.width() {
            display.draw(i32::from(x), i32::from(y), "█", gradient_color(x, y))?;
        }
    }
    display.update()
}

/// The sixteen ANSI colors in slot order.
pub fn ansi_colors() -> impl Iterator<Item = Color> {
    ANSI_BASE.into_iter().chain(ANSI_BRIGHT)
}

/// Draw one labelled swatch per ANSI color, then update.
///
/// Each swatch shows the color's hex value and the palette slot it resolved
/// to, so the output reveals how the active strategy mapped it.
pub fn palette<B: TerminalBackend>(display: &mut Display<B>) -> Result<(), DisplayError> {
    let title = format!("ANSI palette, {} mode", display.color_mode());
    draw_text(display, 0, 0, &title, Color::WHITE)?;

    for (i, color) in (0u16..).zip(ansi_colors()) {
        let left = (i % 8) * SWATCH_WIDTH;
        let top = 1 + (i / 8) * (SWATCH_ROWS + 3);

        let slot = display.slot_for(color)?;
        for row in top..top + SWATCH_ROWS {
            draw_text(display, left, row, SWATCH_GLYPH, color)?;
        }
        draw_text(display, left, top + SWATCH_ROWS, &color.to_string(), Color::WHITE)?;
        draw_text(
            display,
            left,
            top + SWATCH_ROWS + 1,
            &format!("slot {}", slot),
            Color::WHITE,
        )?;
    }
    display.update()
}

/// Fill every cell with `glyph` in `color`.
pub fn fill<B: TerminalBackend>(
    display: &mut Display<B>,
    glyph: &str,
    color: Color,
) -> Result<(), DisplayError> {
    display.fill_screen(glyph, color)
}
