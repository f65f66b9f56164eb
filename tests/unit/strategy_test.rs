//! Unit tests for color strategies

use std::collections::HashSet;

use gridterm::color::Color;
use gridterm::strategy::fixed::{ANSI_BASE, ANSI_BRIGHT};
use gridterm::strategy::{
    self, ColorMode, ColorStrategy, DirectColorStrategy, FixedPaletteStrategy, Slot,
    StrategyOptions,
};

use crate::helpers::{distinct_colors, FailingPalette, RecordingPalette};

#[test]
fn direct_hands_out_distinct_slots_until_exhaustion() {
    let mut strategy = DirectColorStrategy::new(256, 16);
    let mut palette = RecordingPalette::default();

    let slots: Vec<Slot> = distinct_colors(240)
        .into_iter()
        .map(|c| strategy.slot_for(c, &mut palette).unwrap())
        .collect();

    let unique: HashSet<_> = slots.iter().collect();
    assert_eq!(unique.len(), 240);
    assert!(slots.iter().all(|s| (16..256).contains(&s.index())));
    assert!(strategy.is_exhausted());
    assert_eq!(palette.programmed.len(), 240);
}

#[test]
fn direct_never_programs_past_exhaustion() {
    let mut strategy = DirectColorStrategy::new(32, 16);
    let mut palette = RecordingPalette::default();

    for color in distinct_colors(100) {
        let slot = strategy.slot_for(color, &mut palette).unwrap();
        assert!(slot.index() >= 16 && slot.index() < 32);
    }
    assert_eq!(palette.programmed.len(), 16);
}

#[test]
fn direct_same_color_twice_programs_once() {
    let mut strategy = DirectColorStrategy::new(256, 16);
    let mut palette = RecordingPalette::default();
    let orange = Color::new(255, 128, 0);

    let first = strategy.slot_for(orange, &mut palette).unwrap();
    let second = strategy.slot_for(orange, &mut palette).unwrap();

    assert_eq!(first, second);
    assert_eq!(palette.programmed, vec![(first, orange)]);
}

#[test]
fn direct_failure_is_retried_on_next_call() {
    let mut strategy = DirectColorStrategy::new(256, 16);
    let color = Color::new(1, 2, 3);

    assert!(strategy.slot_for(color, &mut FailingPalette).is_err());
    assert_eq!(strategy.cached(color), None);

    let mut palette = RecordingPalette::default();
    assert_eq!(strategy.slot_for(color, &mut palette).unwrap(), Slot(16));
}

#[test]
fn fixed_is_deterministic() {
    let mut strategy = FixedPaletteStrategy::ansi16();
    let mut palette = RecordingPalette::default();
    let color = Color::new(123, 45, 67);

    let a = strategy.slot_for(color, &mut palette).unwrap();
    let b = strategy.slot_for(color, &mut palette).unwrap();
    assert_eq!(a, b);
    assert!(palette.programmed.is_empty());
}

#[test]
fn fixed_returns_a_nearest_entry() {
    let strategy = FixedPaletteStrategy::ansi16();
    for r in (0..=255).step_by(51) {
        for g in (0..=255).step_by(51) {
            for b in (0..=255).step_by(51) {
                let color = Color::new(r as u8, g as u8, b as u8);
                let slot = strategy.lookup(color);
                let chosen = strategy.color_of(slot).unwrap();
                let best = strategy
                    .entries()
                    .iter()
                    .map(|(c, _)| color.distance_sq(*c))
                    .min()
                    .unwrap();
                assert_eq!(color.distance_sq(chosen), best, "{color} -> {slot}");
            }
        }
    }
}

#[test]
fn ansi_sets_are_in_slot_order() {
    let ansi16 = FixedPaletteStrategy::ansi16();
    for (i, color) in ANSI_BASE.iter().chain(ANSI_BRIGHT.iter()).enumerate() {
        assert_eq!(ansi16.color_of(Slot(i as u16)), Some(*color));
    }
    assert_eq!(FixedPaletteStrategy::ansi8().entries().len(), 8);
}

#[test]
fn select_follows_threshold() {
    let options = StrategyOptions::default();
    assert_eq!(strategy::select(8, &options).mode(), ColorMode::Fixed);
    assert_eq!(strategy::select(16, &options).mode(), ColorMode::Fixed);
    assert_eq!(strategy::select(17, &options).mode(), ColorMode::Direct);
    assert_eq!(strategy::select(256, &options).mode(), ColorMode::Direct);
}

#[test]
fn selected_fixed_strategy_respects_small_palettes() {
    let mut strategy = strategy::select(8, &StrategyOptions::default());
    let mut palette = RecordingPalette::default();
    for color in distinct_colors(300) {
        assert!(strategy.slot_for(color, &mut palette).unwrap().index() < 8);
    }
    assert!(palette.programmed.is_empty());
}
