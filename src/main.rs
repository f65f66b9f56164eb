//! gridterm - CLI entry point

mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use gridterm::cli::{Cli, Commands, ConfigCommands};

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_file.as_deref()) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Info => commands::info::handle(&commands::config::load(config_path)?),
        Commands::Fill { color, glyph } => {
            let config = commands::config::load(config_path)?;
            commands::draw::handle_fill(&config, &glyph, color)
        }
        Commands::Gradient => {
            commands::draw::handle_gradient(&commands::config::load(config_path)?)
        }
        Commands::Palette => commands::draw::handle_palette(&commands::config::load(config_path)?),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(config_path),
            ConfigCommands::Path => commands::config::handle_path(config_path),
            ConfigCommands::Init { force } => commands::config::handle_init(config_path, force),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}

/// Default log file (~/.local/state/gridterm/gridterm.log).
fn default_log_path() -> Result<PathBuf> {
    let state_dir = match dirs::state_dir() {
        Some(dir) => dir,
        None => dirs::home_dir()
            .context("Could not determine home directory")?
            .join(".local")
            .join("state"),
    };
    Ok(state_dir.join("gridterm").join("gridterm.log"))
}

/// Send tracing output to a log file so it never lands on the drawn screen.
///
/// The level comes from `RUST_LOG`, defaulting to `info`.
#[cfg(not(tarpaulin_include))]
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let path = match log_file {
        Some(path) => path.to_path_buf(),
        None => default_log_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {:?}", parent))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {:?}", path))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;
    tracing::debug!(version = gridterm::cli::version(), "gridterm starting");
    Ok(())
}
