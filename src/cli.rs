//! CLI definitions for gridterm
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::color::Color;

/// Build clap styles for the help output.
///
/// - Green: headers, usage, command names
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

/// Version string, with the commit hash when the build script found one.
pub fn version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if sha != "unknown" => format!("{} ({})", env!("CARGO_PKG_VERSION"), sha),
        _ => env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Parse `R,G,B` or `#rrggbb` into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, String> {
    Color::parse(s).ok_or_else(|| format!("invalid color '{}': expected R,G,B or #rrggbb", s))
}

#[derive(Parser)]
#[command(name = "gridterm")]
#[command(about = "[ gridterm ] - a fixed 80x24 color grid on any terminal")]
#[command(
    long_about = "gridterm - draw on a fixed 80x24 character grid in RGB colors.

The grid is the same size on every terminal that is at least 80x24. RGB colors
are mapped onto whatever the terminal supports: on 256-color terminals palette
slots are reprogrammed on demand, on 8/16-color terminals each color is matched
to the nearest ANSI color.

QUICK START:
    gridterm info                      Show what this terminal supports
    gridterm fill --color 255,128,0    Fill the screen in orange
    gridterm gradient                  Draw an RGB gradient
    gridterm palette                   Show the ANSI swatches

Logs are written to ~/.local/state/gridterm/gridterm.log (set RUST_LOG to
change the level)."
)]
#[command(version = version())]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Write logs to this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Read configuration from this file instead of ~/.config/gridterm/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show terminal size, color count and the color mode that would be used
    #[command(long_about = "Probe the terminal without taking over the screen.

Prints the physical size, the number of palette colors and which color mode
(direct or fixed) a display would run in with the current configuration.

EXAMPLE:
    gridterm info")]
    Info,

    /// Fill the whole grid with one glyph in one color
    #[command(long_about = "Fill every cell of the 80x24 grid, then wait for a key.

EXAMPLES:
    gridterm fill --color 255,128,0
    gridterm fill --color '#3366ff' --glyph '#'")]
    Fill {
        /// Color as R,G,B or #rrggbb
        #[arg(long, value_parser = parse_color, default_value = "255,255,255")]
        color: Color,
        /// Glyph drawn in every cell
        #[arg(long, default_value = "█")]
        glyph: String,
    },

    /// Draw an RGB gradient across the grid
    #[command(long_about = "Draw a red/green gradient across the grid with a blue
band per row, then wait for a key.

On 256-color terminals each distinct color gets its own palette slot until the
palette runs out; after that the nearest programmed slot is reused.

EXAMPLE:
    gridterm gradient")]
    Gradient,

    /// Draw the ANSI color swatches with their palette slots
    #[command(long_about = "Draw one swatch per standard ANSI color, labelled with
the palette slot it resolved to, then wait for a key.

EXAMPLE:
    gridterm palette")]
    Palette,

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and create the gridterm configuration file.

Configuration is stored in ~/.config/gridterm/config.toml and covers the TERM
override, palette reservation and display session options.

EXAMPLES:
    gridterm config show     Display current configuration
    gridterm config path     Print the config file location
    gridterm config init     Write the default configuration"
    )]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    #[command(long_about = "Display the current configuration in TOML format.

Missing keys are shown with their default values.

EXAMPLE:
    gridterm config show")]
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration file
    #[command(long_about = "Write the default configuration to the config file.

Refuses to overwrite an existing file unless --force is given.

EXAMPLE:
    gridterm config init")]
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
