//! Unit tests for config module

use gridterm::config::{DisplayConfig, PaletteConfig, SessionConfig};
use gridterm::Config;

use crate::helpers::temp_config;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.session.term, "xterm-256color");
    assert_eq!(config.session.term_override(), Some("xterm-256color"));
    assert_eq!(config.palette.reserved_slots, 16);
    assert_eq!(config.palette.direct_color_threshold, 16);
    assert!(config.display.hide_cursor);
    assert!(config.display.extended_keys);
}

#[test]
fn config_serialization_roundtrip() {
    let mut config = Config::default();
    config.palette.reserved_slots = 8;
    config.display.extended_keys = false;

    let toml_str = config.to_toml().unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn missing_sections_use_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn missing_keys_use_defaults() {
    let toml_str = r#"
[palette]
direct_color_threshold = 88
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.palette.direct_color_threshold, 88);
    assert_eq!(config.palette.reserved_slots, 16);
    assert_eq!(config.session, SessionConfig::default());
    assert_eq!(config.display, DisplayConfig::default());
}

#[test]
fn empty_term_disables_override() {
    let config: Config = toml::from_str("[session]\nterm = \"  \"\n").unwrap();
    assert_eq!(config.session.term_override(), None);
}

#[test]
fn palette_options_carry_through() {
    let palette = PaletteConfig {
        reserved_slots: 4,
        direct_color_threshold: 88,
    };
    let options = palette.strategy_options();
    assert_eq!(options.reserved_slots, 4);
    assert_eq!(options.direct_color_threshold, 88);
}

#[test]
fn reserving_every_slot_is_invalid() {
    let palette = PaletteConfig {
        reserved_slots: 256,
        ..PaletteConfig::default()
    };
    let err = palette.validate().unwrap_err();
    assert!(err.contains("reserved_slots 256"), "{err}");
    assert!(PaletteConfig::default().validate().is_ok());
}

#[test]
fn load_from_missing_file_returns_defaults() {
    let temp = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_from_reads_file() {
    let (_temp, path) = temp_config("[session]\nterm = \"screen-256color\"\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.session.term_override(), Some("screen-256color"));
}

#[test]
fn load_from_rejects_invalid_palette() {
    let (_temp, path) = temp_config("[palette]\nreserved_slots = 300\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid config"));
}

#[test]
fn load_from_reports_parse_errors_with_path() {
    let (_temp, path) = temp_config("[palette\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn save_to_creates_parent_directories() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("a").join("b").join("config.toml");
    let mut config = Config::default();
    config.display.hide_cursor = false;

    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}
