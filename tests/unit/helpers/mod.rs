//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::io;
use std::path::PathBuf;
use tempfile::TempDir;

use gridterm::color::Color;
use gridterm::strategy::{PaletteProgrammer, Slot};

/// Palette programmer that records every slot it is asked to program.
#[derive(Default)]
pub struct RecordingPalette {
    pub programmed: Vec<(Slot, Color)>,
}

impl PaletteProgrammer for RecordingPalette {
    fn program(&mut self, slot: Slot, color: Color) -> io::Result<()> {
        self.programmed.push((slot, color));
        Ok(())
    }
}

/// Palette programmer that always fails.
pub struct FailingPalette;

impl PaletteProgrammer for FailingPalette {
    fn program(&mut self, _slot: Slot, _color: Color) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "palette unavailable"))
    }
}

/// Write `contents` as config.toml in a fresh temp dir.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, contents).expect("Failed to write config");
    (temp_dir, path)
}

/// `n` distinct colors.
pub fn distinct_colors(n: usize) -> Vec<Color> {
    (0..n)
        .map(|i| Color::new((i % 256) as u8, (i / 256) as u8, 7))
        .collect()
}
