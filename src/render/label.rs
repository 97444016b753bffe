//! Cabinet label text: font choice and scaled glyph drawing.

use embedded_graphics::{
    draw_target::DrawTarget,
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_5X8, FONT_6X10, FONT_6X13, FONT_9X15, FONT_9X18, FONT_10X20},
    },
    pixelcolor::Rgb888,
    prelude::*,
    primitives::Rectangle,
    text::Text,
};

use crate::color::{Color, ToRgb888};

/// Largest integer glyph magnification.
pub const MAX_SCALE: u32 = 1024;

/// Built-in bitmap faces labels are drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelFace {
    /// 5×8 pixel glyphs.
    Font5x8,
    /// 6×10 pixel glyphs.
    Font6x10,
    /// 6×13 pixel glyphs.
    Font6x13,
    /// 9×15 pixel glyphs.
    Font9x15,
    /// 9×18 pixel glyphs.
    Font9x18,
    /// 10×20 pixel glyphs.
    Font10x20,
}

impl LabelFace {
    /// Every face, smallest first.
    pub const ALL: [Self; 6] = [
        Self::Font5x8,
        Self::Font6x10,
        Self::Font6x13,
        Self::Font9x15,
        Self::Font9x18,
        Self::Font10x20,
    ];

    /// Return the `MonoFont` for this face.
    #[must_use]
    pub fn to_font(self) -> MonoFont<'static> {
        match self {
            Self::Font5x8 => FONT_5X8,
            Self::Font6x10 => FONT_6X10,
            Self::Font6x13 => FONT_6X13,
            Self::Font9x15 => FONT_9X15,
            Self::Font9x18 => FONT_9X18,
            Self::Font10x20 => FONT_10X20,
        }
    }

    /// Unscaled glyph cell size.
    #[must_use]
    pub const fn glyph_size(self) -> Size {
        match self {
            Self::Font5x8 => Size::new(5, 8),
            Self::Font6x10 => Size::new(6, 10),
            Self::Font6x13 => Size::new(6, 13),
            Self::Font9x15 => Size::new(9, 15),
            Self::Font9x18 => Size::new(9, 18),
            Self::Font10x20 => Size::new(10, 20),
        }
    }
}

/// A face plus an integer magnification approximating a requested pixel size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LabelFont {
    face: LabelFace,
    scale: u32,
}

impl LabelFont {
    /// Create a font from an explicit face and scale.
    ///
    /// # Panics
    ///
    /// Panics if `scale` is zero or larger than [`MAX_SCALE`].
    #[must_use]
    pub fn new(face: LabelFace, scale: u32) -> Self {
        assert!(
            (1..=MAX_SCALE).contains(&scale),
            "scale must be in 1..=MAX_SCALE"
        );
        Self { face, scale }
    }

    /// Pick the face and scale whose glyph height is closest to `font_size` pixels.
    /// Ties go to the larger face.
    ///
    /// ```rust
    /// use ledwall_grid::render::{LabelFont, label::LabelFace};
    ///
    /// let font = LabelFont::for_size(50.0);
    /// assert_eq!(font, LabelFont::new(LabelFace::Font6x10, 5));
    /// assert_eq!(font.glyph_height(), 50);
    /// ```
    #[must_use]
    pub fn for_size(font_size: f64) -> Self {
        let mut best = Self::new(LabelFace::Font5x8, 1);
        let mut best_error = f64::INFINITY;
        for face in LabelFace::ALL {
            let glyph_height = f64::from(face.glyph_size().height);
            let lower = (font_size / glyph_height)
                .floor()
                .clamp(1.0, f64::from(MAX_SCALE)) as u32;
            for scale in [lower, (lower + 1).min(MAX_SCALE)] {
                let error = (glyph_height * f64::from(scale) - font_size).abs();
                if error <= best_error {
                    best = Self { face, scale };
                    best_error = error;
                }
            }
        }
        best
    }

    /// The bitmap face.
    #[must_use]
    pub const fn face(&self) -> LabelFace {
        self.face
    }

    /// Integer magnification.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Rendered glyph height in pixels.
    #[must_use]
    pub const fn glyph_height(&self) -> u32 {
        self.face.glyph_size().height * self.scale
    }

    /// Area covered by `text` when anchored at `anchor`.
    #[must_use]
    pub fn text_bounds(&self, text: &str, anchor: Point) -> Rectangle {
        let font = self.face.to_font();
        let character_style = MonoTextStyle::new(&font, Rgb888::WHITE);
        let unscaled = Text::new(text, Point::zero(), character_style).bounding_box();
        Rectangle::new(
            anchor + unscaled.top_left * self.signed_scale(),
            unscaled.size * self.scale,
        )
    }

    fn signed_scale(&self) -> i32 {
        i32::try_from(self.scale).unwrap_or(i32::MAX)
    }
}

/// Draw `text` with the default text anchoring at `anchor`: the text starts at `anchor`
/// and its alphabetic baseline passes through it, like a canvas `fillText`.
///
/// # Errors
///
/// Returns any error reported by `target`.
pub fn draw_label<D>(
    target: &mut D,
    text: &str,
    anchor: Point,
    color: Color,
    font: &LabelFont,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let mono_font = font.face.to_font();
    let character_style = MonoTextStyle::new(&mono_font, color.to_rgb888());
    let mut scaled = ScaledTarget {
        target,
        anchor,
        scale: font.scale,
    };
    Text::new(text, Point::zero(), character_style).draw(&mut scaled)?;
    Ok(())
}

/// Draws every incoming pixel as a `scale × scale` block, with glyph-space origin at `anchor`.
struct ScaledTarget<'a, D> {
    target: &'a mut D,
    anchor: Point,
    scale: u32,
}

impl<D: DrawTarget<Color = Rgb888>> Dimensions for ScaledTarget<'_, D> {
    fn bounding_box(&self) -> Rectangle {
        let scale = i32::try_from(self.scale).unwrap_or(i32::MAX);
        let target_box = self.target.bounding_box();
        Rectangle::new(
            (target_box.top_left - self.anchor) / scale - Point::new(1, 1),
            target_box.size / self.scale + Size::new(2, 2),
        )
    }
}

impl<D: DrawTarget<Color = Rgb888>> DrawTarget for ScaledTarget<'_, D> {
    type Color = Rgb888;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let block = Size::new_equal(self.scale);
        let scale = i32::try_from(self.scale).unwrap_or(i32::MAX);
        for Pixel(point, color) in pixels {
            self.target
                .fill_solid(&Rectangle::new(self.anchor + point * scale, block), color)?;
        }
        Ok(())
    }
}
