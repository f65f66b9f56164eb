//! Display errors.

use std::fmt;

/// Which coordinate of a draw call was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Errors that can occur while setting up or drawing to a display.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error(
        "Please resize your terminal to be at least {required_cols}x{required_rows} \
         (currently, it's {actual_cols}x{actual_rows})"
    )]
    Initialization {
        required_cols: u16,
        required_rows: u16,
        actual_cols: u16,
        actual_rows: u16,
    },

    #[error("Can't draw {glyph} at ({x}, {y}); invalid {axis} coordinate")]
    Coordinate {
        x: i32,
        y: i32,
        glyph: String,
        axis: Axis,
    },

    #[error("Terminal backend error: {0}")]
    Backend(#[from] std::io::Error),
}

impl DisplayError {
    /// The invalid axis, for coordinate errors.
    pub fn axis(&self) -> Option<Axis> {
        match self {
            DisplayError::Coordinate { axis, .. } => Some(*axis),
            _ => None,
        }
    }
}
