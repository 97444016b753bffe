//! Colors: hex parsing, conversion between [`Color`] and
//! [`embedded-graphics`](https://docs.rs/embedded-graphics) colors, and the
//! [`ColorSource`] that picks cabinet border colors.
//!
//! Cabinet borders are deliberately given an arbitrary color per render so neighbouring
//! cabinets are easy to tell apart. Use [`RandomColors`] for that behavior, or
//! [`SeededColors`] / [`CyclingColors`] when a render must be reproducible.

use embedded_graphics::prelude::RgbColor;
use rand::rngs::{StdRng, ThreadRng};
use rand::{RngCore, SeedableRng};

use crate::{Error, Result};

/// Predefined RGB color constants from the `smart_leds` crate.
#[doc(inline)]
pub use smart_leds::colors;

/// 8-bit-per-channel RGB color from `embedded_graphics`.
#[doc(inline)]
pub use embedded_graphics::pixelcolor::Rgb888;

/// RGB color used throughout [`GridConfig`](crate::GridConfig) and [`ColorSource`].
pub type Color = smart_leds::RGB8;

/// Convert colors to [`Color`].
pub trait ToColor {
    /// Convert this color to [`Color`].
    #[must_use]
    fn to_color(self) -> Color;
}

impl ToColor for Color {
    #[inline(always)]
    fn to_color(self) -> Color {
        self
    }
}

impl ToColor for Rgb888 {
    #[inline(always)]
    fn to_color(self) -> Color {
        Color::new(self.r(), self.g(), self.b())
    }
}

/// Convert colors to [`Rgb888`] for embedded-graphics rendering.
pub trait ToRgb888 {
    /// Convert this color to [`Rgb888`].
    #[must_use]
    fn to_rgb888(self) -> Rgb888;
}

impl ToRgb888 for Color {
    #[inline(always)]
    fn to_rgb888(self) -> Rgb888 {
        Rgb888::new(self.r, self.g, self.b)
    }
}

impl ToRgb888 for Rgb888 {
    #[inline(always)]
    fn to_rgb888(self) -> Rgb888 {
        self
    }
}

/// Gray with all three channels set to `level`.
#[must_use]
pub const fn gray(level: u8) -> Rgb888 {
    Rgb888::new(level, level, level)
}

/// Parse a CSS-style hex color: `#RRGGBB` or `#RGB`, case-insensitive, `#` optional.
///
/// `field` names the configuration field for the error message.
///
/// # Errors
///
/// Returns [`Error::InvalidStyle`] if `text` is not a hex color.
///
/// ```rust
/// use ledwall_grid::color::{Color, parse_hex_color};
///
/// assert_eq!(parse_hex_color("fontColor", "#808080")?, Color::new(128, 128, 128));
/// assert_eq!(parse_hex_color("fontColor", "#fA0")?, Color::new(255, 170, 0));
/// assert!(parse_hex_color("fontColor", "red").is_err());
/// # Ok::<(), ledwall_grid::Error>(())
/// ```
pub fn parse_hex_color(field: &'static str, text: &str) -> Result<Color> {
    let digits = text.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(Error::style(field, format!("is not a hex color: {text:?}")));
    }
    let channel = |hex: &str| {
        u8::from_str_radix(hex, 16)
            .map_err(|_| Error::style(field, format!("is not a hex color: {text:?}")))
    };
    match digits.len() {
        6 => Ok(Color::new(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        3 => {
            // Each short-form digit is repeated: "#fa0" is "#ffaa00".
            let widen = |hex: &str| channel(hex).map(|nibble| nibble * 0x11);
            Ok(Color::new(
                widen(&digits[0..1])?,
                widen(&digits[1..2])?,
                widen(&digits[2..3])?,
            ))
        }
        _ => Err(Error::style(
            field,
            format!("must have 3 or 6 hex digits: {text:?}"),
        )),
    }
}

/// Format a color as `#rrggbb`.
#[must_use]
pub fn to_hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// Supplies one color per cabinet border, in drawing order.
pub trait ColorSource {
    /// Return the color for the next cabinet border.
    fn next_color(&mut self) -> Color;
}

impl<S: ColorSource + ?Sized> ColorSource for &mut S {
    fn next_color(&mut self) -> Color {
        (**self).next_color()
    }
}

fn color_from_bits(bits: u32) -> Color {
    let [_, red, green, blue] = bits.to_be_bytes();
    Color::new(red, green, blue)
}

/// Unseeded uniform 24-bit colors; every render looks different.
#[derive(Debug, Default)]
pub struct RandomColors {
    rng: ThreadRng,
}

impl RandomColors {
    /// Create a source backed by the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Color {
        color_from_bits(self.rng.next_u32())
    }
}

/// Uniform 24-bit colors from a seeded generator. The same seed yields the same sequence.
#[derive(Debug, Clone)]
pub struct SeededColors {
    rng: StdRng,
}

impl SeededColors {
    /// Create a source seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ColorSource for SeededColors {
    fn next_color(&mut self) -> Color {
        color_from_bits(self.rng.next_u32())
    }
}

/// Cycles through a fixed list of colors. An empty list yields white.
#[derive(Debug, Clone)]
pub struct CyclingColors {
    colors: Vec<Color>,
    color_index: usize,
}

impl CyclingColors {
    /// Create a source cycling through `colors`.
    #[must_use]
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
            color_index: 0,
        }
    }

    /// A source that always returns `color`.
    #[must_use]
    pub fn constant(color: Color) -> Self {
        Self::new([color])
    }
}

impl ColorSource for CyclingColors {
    fn next_color(&mut self) -> Color {
        if self.colors.is_empty() {
            return colors::WHITE;
        }
        let color = self.colors[self.color_index % self.colors.len()];
        self.color_index = self.color_index.wrapping_add(1);
        color
    }
}
