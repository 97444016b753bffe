//! The raster surface every renderer paints onto.
//!
//! [`RenderedImage`] is a plain RGBA8 pixel buffer with row-major storage. It implements
//! the [`embedded-graphics`](https://docs.rs/embedded-graphics) [`DrawTarget`] trait, so
//! rectangles, strokes and text are drawn with the usual embedded-graphics API:
//!
//! ```rust
//! use embedded_graphics::{
//!     pixelcolor::Rgb888,
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//! };
//! use ledwall_grid::{PixelSize, RenderedImage};
//!
//! let mut image = RenderedImage::new(PixelSize { width: 8, height: 4 });
//! Rectangle::new(Point::zero(), Size::new(8, 4))
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb888::RED, 1))
//!     .draw(&mut image)
//!     .unwrap_or_else(|never| match never {});
//!
//! assert_eq!(image.pixel(0, 0), [255, 0, 0, 255]);
//! assert_eq!(image.pixel(3, 2), [0, 0, 0, 0]); // untouched pixels stay transparent
//! ```

use core::convert::Infallible;

use embedded_graphics::{
    draw_target::DrawTarget,
    pixelcolor::Rgb888,
    prelude::*,
    primitives::Rectangle,
};

use crate::color::{Color, ToColor};
use crate::resolution::PixelSize;

/// Bytes per pixel (RGBA).
pub const CHANNELS: usize = 4;

/// A finished (or in-progress) wall preview: RGBA8 pixels, row-major.
///
/// A new image is fully transparent. Every pixel drawn through [`DrawTarget`] is opaque.
#[derive(Clone, PartialEq, Eq, derive_more::Debug)]
pub struct RenderedImage {
    width: u32,
    height: u32,
    #[debug(skip)]
    rgba: Vec<u8>,
}

impl RenderedImage {
    /// Create a fully transparent image of the given size.
    #[must_use]
    pub fn new(pixel_size: PixelSize) -> Self {
        let byte_len = usize::try_from(pixel_size.pixel_count())
            .ok()
            .and_then(|pixel_count| pixel_count.checked_mul(CHANNELS))
            .expect("pixel size must fit in memory");
        Self {
            width: pixel_size.width,
            height: pixel_size.height,
            rgba: vec![0; byte_len],
        }
    }

    /// Wrap existing row-major RGBA bytes.
    ///
    /// # Panics
    ///
    /// Panics if `rgba` does not hold exactly `width × height × 4` bytes.
    #[must_use]
    pub fn from_rgba(pixel_size: PixelSize, rgba: Vec<u8>) -> Self {
        assert_eq!(
            rgba.len() as u64,
            pixel_size.pixel_count() * CHANNELS as u64,
            "rgba length must match pixel size"
        );
        Self {
            width: pixel_size.width,
            height: pixel_size.height,
            rgba,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Width and height as a [`PixelSize`].
    #[must_use]
    pub const fn pixel_size(&self) -> PixelSize {
        PixelSize {
            width: self.width,
            height: self.height,
        }
    }

    /// RGBA bytes of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.get_pixel(x, y)
            .expect("pixel coordinates must be within the image")
    }

    /// RGBA bytes of the pixel at `(x, y)`, or `None` outside the image.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = self.offset(x, y);
        let mut pixel = [0; CHANNELS];
        pixel.copy_from_slice(self.rgba.get(offset..offset + CHANNELS)?);
        Some(pixel)
    }

    /// Color of the pixel at `(x, y)`, ignoring alpha.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    #[must_use]
    pub fn color_at(&self, x: u32, y: u32) -> Color {
        let [red, green, blue, _] = self.pixel(x, y);
        Color::new(red, green, blue)
    }

    /// Raw RGBA bytes, row-major.
    #[must_use]
    pub fn as_rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Consume the image and return its RGBA bytes.
    #[must_use]
    pub fn into_rgba(self) -> Vec<u8> {
        self.rgba
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    fn fill_row(&mut self, y: u32, left: u32, right_exclusive: u32, color: Rgb888) {
        let start = self.offset(left, y);
        let end = self.offset(right_exclusive, y);
        let rgba = [color.r(), color.g(), color.b(), u8::MAX];
        for pixel in self.rgba[start..end].chunks_exact_mut(CHANNELS) {
            pixel.copy_from_slice(&rgba);
        }
    }
}

impl OriginDimensions for RenderedImage {
    fn size(&self) -> Size {
        self.pixel_size().size()
    }
}

impl DrawTarget for RenderedImage {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let (Ok(x), Ok(y)) = (u32::try_from(coord.x), u32::try_from(coord.y))
                && x < self.width
                && y < self.height
            {
                let offset = self.offset(x, y);
                let color = color.to_color();
                self.rgba[offset..offset + CHANNELS]
                    .copy_from_slice(&[color.r, color.g, color.b, u8::MAX]);
            }
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> core::result::Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        // Intersection with the bounding box keeps every coordinate non-negative.
        let left = area.top_left.x.unsigned_abs();
        let right_exclusive = bottom_right.x.unsigned_abs() + 1;
        for y in area.top_left.y.unsigned_abs()..=bottom_right.y.unsigned_abs() {
            self.fill_row(y, left, right_exclusive, color);
        }
        Ok(())
    }
}
