//! Color resolution through the display

use std::collections::HashSet;

use gridterm::backend::memory::BackendCall;
use gridterm::{Color, ColorMode, Config, Slot};

use crate::helpers::{memory_display, memory_display_with};

#[test]
fn sixteen_colors_is_fixed_seventeen_is_direct() {
    assert_eq!(memory_display(16).color_mode(), ColorMode::Fixed);
    assert_eq!(memory_display(17).color_mode(), ColorMode::Direct);
    assert_eq!(memory_display(8).color_mode(), ColorMode::Fixed);
    assert_eq!(memory_display(256).color_mode(), ColorMode::Direct);
}

#[test]
fn threshold_comes_from_config() {
    let mut config = Config::default();
    config.palette.direct_color_threshold = 88;
    assert_eq!(memory_display_with(&config, 88).color_mode(), ColorMode::Fixed);
    assert_eq!(memory_display_with(&config, 256).color_mode(), ColorMode::Direct);
}

#[test]
fn white_is_programmed_at_backend_max() {
    let mut display = memory_display(256);
    let slot = display.slot_for(Color::WHITE).unwrap();
    assert_eq!(
        display.backend().palette_entry(slot),
        Some((1000, 1000, 1000))
    );
}

#[test]
fn repeated_color_is_programmed_at_most_once() {
    let mut display = memory_display(256);
    let teal = Color::new(0, 128, 128);
    for x in 0..10 {
        display.draw(x, 0, "~", teal).unwrap();
    }
    let backend = display.backend();
    assert_eq!(backend.count("init_color"), 1);
    let first = backend.cell(0, 0).unwrap().slot;
    assert!((0..10).all(|x| backend.cell(x, 0).unwrap().slot == first));
}

#[test]
fn distinct_colors_get_distinct_slots_above_reserved() {
    let mut display = memory_display(256);
    let mut seen = HashSet::new();
    for i in 0..100u8 {
        let slot = display.slot_for(Color::new(i, 255 - i, 42)).unwrap();
        assert!(slot.index() >= 16, "reserved slot {slot} handed out");
        assert!(seen.insert(slot), "slot {slot} reused");
    }
}

#[test]
fn reserved_slots_come_from_config() {
    let mut config = Config::default();
    config.palette.reserved_slots = 1;
    let mut display = memory_display_with(&config, 256);
    assert_eq!(display.slot_for(Color::new(9, 9, 9)).unwrap(), Slot(1));
}

#[test]
fn exhausted_palette_reuses_nearest_without_reprogramming() {
    // 20 slots, 16 reserved: room for four colors
    let mut display = memory_display(20);
    let programmed = [
        Color::new(0, 0, 0),
        Color::new(255, 0, 0),
        Color::new(0, 255, 0),
        Color::new(0, 0, 255),
    ];
    for color in programmed {
        display.slot_for(color).unwrap();
    }
    assert_eq!(display.backend().count("init_color"), 4);

    let reddish = display.slot_for(Color::new(200, 30, 30)).unwrap();
    assert_eq!(reddish, Slot(17));
    assert_eq!(display.backend().count("init_color"), 4);
    // and stays put
    assert_eq!(display.slot_for(Color::new(200, 30, 30)).unwrap(), Slot(17));
}

#[test]
fn fixed_mode_never_programs_the_palette() {
    let mut display = memory_display(8);
    for i in 0..=255u8 {
        let slot = display.slot_for(Color::new(i, i / 2, 255 - i)).unwrap();
        assert!(slot.index() < 8);
    }
    assert_eq!(display.backend().count("init_color"), 0);
}

#[test]
fn fixed_mode_maps_to_nearest_ansi_color() {
    let mut display = memory_display(16);
    assert_eq!(display.slot_for(Color::new(250, 250, 250)).unwrap(), Slot(15));
    assert_eq!(display.slot_for(Color::new(10, 10, 10)).unwrap(), Slot(0));
    assert_eq!(display.slot_for(Color::new(0, 160, 0)).unwrap(), Slot(2));
}

#[test]
fn set_palette_entry_scales_channels() {
    let mut display = memory_display(256);
    display
        .set_palette_entry(Slot(100), Color::new(255, 128, 1))
        .unwrap();
    assert!(display.backend().calls().contains(&BackendCall::InitColor {
        slot: Slot(100),
        r: 1000,
        g: 512,
        b: 4,
    }));
}
