//! gridterm Library
//!
//! A fixed 80x24 character grid on top of whatever terminal is available,
//! with RGB colors degraded to the palette the terminal actually supports.

pub mod backend;
pub mod cli;
pub mod color;
pub mod config;
pub mod demo;
pub mod display;
pub mod error;
pub mod session;
pub mod strategy;

pub use backend::{CrosstermBackend, MemoryBackend, TerminalBackend, TerminalInfo};
pub use color::Color;
pub use config::Config;
pub use display::{Display, TerminalDisplay, HEIGHT, WIDTH};
pub use error::{Axis, DisplayError};
pub use strategy::{ColorMode, Slot};
