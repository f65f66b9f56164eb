//! Unit tests for the color module

use gridterm::color::{Color, BACKEND_CHANNEL_MAX};

#[test]
fn white_scales_to_backend_max_not_past_it() {
    // 255 * 4 = 1020 must clamp
    assert_eq!(
        Color::WHITE.to_backend_channels(),
        (BACKEND_CHANNEL_MAX, BACKEND_CHANNEL_MAX, BACKEND_CHANNEL_MAX)
    );
}

#[test]
fn black_scales_to_zero() {
    assert_eq!(Color::BLACK.to_backend_channels(), (0, 0, 0));
}

#[test]
fn clamp_starts_at_250() {
    assert_eq!(Color::new(249, 250, 251).to_backend_channels(), (996, 1000, 1000));
}

#[test]
fn colors_are_value_types() {
    let a = Color::new(10, 20, 30);
    let b: Color = (10, 20, 30).into();
    assert_eq!(a, b);

    let mut set = std::collections::HashSet::new();
    set.insert(a);
    set.insert(b);
    assert_eq!(set.len(), 1);
}

#[test]
fn named_constants() {
    assert_eq!(Color::BLACK, Color::new(0, 0, 0));
    assert_eq!(Color::WHITE, Color::new(255, 255, 255));
    assert_eq!(Color::default(), Color::BLACK);
}

#[test]
fn parse_accepts_whitespace_and_case() {
    assert_eq!(Color::parse(" 1, 2 ,3 "), Some(Color::new(1, 2, 3)));
    assert_eq!(Color::parse("#FFaa00"), Some(Color::new(255, 170, 0)));
}

#[test]
fn parse_rejects_wrong_arity_and_range() {
    assert_eq!(Color::parse("1,2"), None);
    assert_eq!(Color::parse("1,2,3,4"), None);
    assert_eq!(Color::parse("256,0,0"), None);
    assert_eq!(Color::parse("#fff"), None);
    assert_eq!(Color::parse(""), None);
}

#[test]
fn display_round_trips_through_parse() {
    let color = Color::new(18, 52, 86);
    assert_eq!(color.to_string(), "#123456");
    assert_eq!(Color::parse(&color.to_string()), Some(color));
}
