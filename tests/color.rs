#![allow(missing_docs)]
//! Color conversion, hex parsing and border color sources.

use ledwall_grid::Error;
use ledwall_grid::color::{
    Color, ColorSource, CyclingColors, RandomColors, Rgb888, SeededColors, ToColor, ToRgb888,
    colors, parse_hex_color, to_hex,
};

#[test]
fn color_converts_to_rgb888_and_back() {
    let color = Color::new(12, 34, 56);
    let rgb888 = color.to_rgb888();
    assert_eq!(rgb888, Rgb888::new(12, 34, 56));
    assert_eq!(rgb888.to_color(), color);
    assert_eq!(colors::ORANGE.to_rgb888().to_color(), colors::ORANGE);
}

#[test]
fn hex_colors_parse() -> Result<(), Error> {
    assert_eq!(parse_hex_color("fontColor", "#808080")?, Color::new(128, 128, 128));
    assert_eq!(parse_hex_color("fontColor", "#FFFFFF")?, colors::WHITE);
    assert_eq!(parse_hex_color("fontColor", "c0c0c0")?, Color::new(192, 192, 192));
    assert_eq!(parse_hex_color("fontColor", " #0F0 ")?, Color::new(0, 255, 0));
    Ok(())
}

#[test]
fn malformed_hex_colors_are_invalid_style() {
    for text in ["", "#", "#12", "#1234", "#12345g", "rgb(0,0,0)", "#+12345"] {
        match parse_hex_color("backgroundColor", text) {
            Err(Error::InvalidStyle { field, .. }) => assert_eq!(field, "backgroundColor"),
            other => panic!("{text:?} must be rejected, got {other:?}"),
        }
    }
}

#[test]
fn hex_formatting_is_lowercase() -> Result<(), Error> {
    assert_eq!(to_hex(Color::new(255, 170, 0)), "#ffaa00");
    let color = Color::new(1, 2, 254);
    assert_eq!(parse_hex_color("fontColor", &to_hex(color))?, color);
    Ok(())
}

#[test]
fn cycling_colors_wrap_around() {
    let mut source = CyclingColors::new([colors::RED, colors::BLUE]);
    let drawn: Vec<Color> = (0..5).map(|_| source.next_color()).collect();
    assert_eq!(
        drawn,
        [colors::RED, colors::BLUE, colors::RED, colors::BLUE, colors::RED]
    );

    let mut empty = CyclingColors::new([]);
    assert_eq!(empty.next_color(), colors::WHITE);
}

#[test]
fn seeded_colors_are_reproducible() {
    let first: Vec<Color> = {
        let mut source = SeededColors::new(42);
        (0..16).map(|_| source.next_color()).collect()
    };
    let second: Vec<Color> = {
        let mut source = SeededColors::new(42);
        (0..16).map(|_| source.next_color()).collect()
    };
    let other: Vec<Color> = {
        let mut source = SeededColors::new(43);
        (0..16).map(|_| source.next_color()).collect()
    };
    assert_eq!(first, second);
    assert_ne!(first, other);
}

#[test]
fn color_source_works_through_a_reference() {
    fn take_two(mut source: impl ColorSource) -> [Color; 2] {
        [source.next_color(), source.next_color()]
    }
    let mut source = CyclingColors::new([colors::RED, colors::LIME, colors::BLUE]);
    assert_eq!(take_two(&mut source), [colors::RED, colors::LIME]);
    assert_eq!(source.next_color(), colors::BLUE);

    let mut random = RandomColors::new();
    let _ = take_two(&mut random);
}
