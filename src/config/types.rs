//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::backend::crossterm::MAX_COLORS;
use crate::strategy::StrategyOptions;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Terminal session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Value `TERM` is set to while the session starts. Empty disables the override.
    #[serde(default = "default_term")]
    pub term: String,
}

pub fn default_term() -> String {
    "xterm-256color".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            term: default_term(),
        }
    }
}

impl SessionConfig {
    /// The `TERM` override to apply, if any.
    pub fn term_override(&self) -> Option<&str> {
        let term = self.term.trim();
        if term.is_empty() {
            None
        } else {
            Some(term)
        }
    }
}

/// Palette / color strategy configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Low slots the direct-color strategy never reprograms
    #[serde(default = "default_reserved_slots")]
    pub reserved_slots: u16,
    /// Direct color is used when the terminal reports more slots than this
    #[serde(default = "default_direct_color_threshold")]
    pub direct_color_threshold: u16,
}

pub fn default_reserved_slots() -> u16 {
    16
}

pub fn default_direct_color_threshold() -> u16 {
    16
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            reserved_slots: default_reserved_slots(),
            direct_color_threshold: default_direct_color_threshold(),
        }
    }
}

impl PaletteConfig {
    pub fn strategy_options(&self) -> StrategyOptions {
        StrategyOptions {
            direct_color_threshold: self.direct_color_threshold,
            reserved_slots: self.reserved_slots,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.reserved_slots >= MAX_COLORS {
            return Err(format!(
                "palette.reserved_slots {} leaves no programmable slot (maximum {})",
                self.reserved_slots,
                MAX_COLORS - 1
            ));
        }
        Ok(())
    }
}

/// Display session behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Hide the text cursor while the display is active
    #[serde(default = "default_true")]
    pub hide_cursor: bool,
    /// Ask the terminal to report extended keys (arrows etc.) distinctly
    #[serde(default = "default_true")]
    pub extended_keys: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hide_cursor: true,
            extended_keys: true,
        }
    }
}
