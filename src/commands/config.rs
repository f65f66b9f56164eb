//! Config subcommands handler

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use gridterm::Config;

/// Resolve the config file path, honouring `--config`.
pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Load the configuration, honouring `--config`.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(explicit: Option<&Path>) -> Result<()> {
    let config = load(explicit)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print the configuration file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(explicit: Option<&Path>) -> Result<()> {
    println!("{}", resolve_path(explicit)?.display());
    Ok(())
}

/// Write the default configuration file.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(explicit: Option<&Path>, force: bool) -> Result<()> {
    let path = resolve_path(explicit)?;
    init_at(&path, force)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

/// Write the default configuration to `path`.
///
/// Refuses to replace an existing file unless `force` is set.
pub(crate) fn init_at(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save_to(path)
}
