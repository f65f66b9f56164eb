//! Info command handler

use anyhow::{Context, Result};

use gridterm::{ColorMode, Config, TerminalDisplay, TerminalInfo, HEIGHT, WIDTH};

/// Probe the terminal and print what it supports.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config) -> Result<()> {
    let (info, mode) = TerminalDisplay::probe(config).context("Failed to probe terminal")?;
    print!("{}", format_info(&info, mode));
    Ok(())
}

/// Human-readable summary of a terminal probe.
pub fn format_info(info: &TerminalInfo, mode: ColorMode) -> String {
    let fits = if info.cols >= WIDTH && info.rows >= HEIGHT {
        "fits"
    } else {
        "too small"
    };
    format!(
        "Terminal: {}x{}\nColors:   {}\nMode:     {}\nGrid:     {}x{} ({})\n",
        info.cols, info.rows, info.colors, mode, WIDTH, HEIGHT, fits
    )
}
