//! Rendered grid snapshots

use gridterm::{demo, Color, Display, MemoryBackend};

use crate::helpers::grid_text;

fn rows(backend: &MemoryBackend, rows: &[u16]) -> String {
    rows.iter()
        .map(|row| backend.row_text(*row).trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn snapshot_palette_on_eight_colors() {
    let mut backend = MemoryBackend::new(80, 24, 8);
    let mut display = Display::with_defaults(&mut backend).unwrap();
    demo::palette(&mut display).unwrap();
    display.destroy().unwrap();

    // Bright colors fall back to their nearest base color.
    insta::assert_snapshot!(rows(&backend, &[0, 9, 10, 20, 21]), @r"
    ANSI palette, fixed mode
    #000000   #aa0000   #00aa00   #aa5500   #0000aa   #aa00aa   #00aaaa   #aaaaaa
    slot 0    slot 1    slot 2    slot 3    slot 4    slot 5    slot 6    slot 7
    #555555   #ff5555   #55ff55   #ffff55   #5555ff   #ff55ff   #55ffff   #ffffff
    slot 0    slot 3    slot 2    slot 7    slot 4    slot 5    slot 6    slot 7
    ");
}

#[test]
fn snapshot_text_in_corners() {
    let mut backend = MemoryBackend::new(80, 24, 256);
    let mut display = Display::with_defaults(&mut backend).unwrap();
    display.clear().unwrap();
    demo::draw_text(&mut display, 0, 0, "top-left", Color::WHITE).unwrap();
    demo::draw_text(&mut display, 71, 23, "bot-right", Color::WHITE).unwrap();
    demo::draw_text(&mut display, 36, 12, "center", Color::new(255, 128, 0)).unwrap();
    display.update().unwrap();
    display.destroy().unwrap();

    let text = grid_text(&backend);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 24);
    insta::assert_snapshot!(lines[0], @"top-left");
    insta::assert_snapshot!(lines[12].trim_start(), @"center");
    insta::assert_snapshot!(lines[23].trim_start(), @"bot-right");
    assert!(lines[1..12].iter().all(|l| l.is_empty()));
}
