#![cfg(feature = "png")]
//! PNG export of a [`RenderedImage`], at full size or as a scaled preview.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use png::{BitDepth, ColorType, Encoder};

use crate::Result;
use crate::resolution::PixelSize;
use crate::surface::{CHANNELS, RenderedImage};

/// Suggested file name for a downloaded wall image.
pub const DEFAULT_FILE_NAME: &str = "grid.png";

/// Integer nearest-neighbor scale factor for previews.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scale {
    /// Every source pixel becomes an `n × n` block.
    Up(u32),
    /// Every `n`-th source pixel is kept on both axes.
    Down(u32),
}

impl Scale {
    /// Size of `pixel_size` after scaling. Downscaled sides never drop below one pixel.
    #[must_use]
    pub fn apply(self, pixel_size: PixelSize) -> PixelSize {
        match self {
            Self::Up(factor) => PixelSize {
                width: pixel_size.width.saturating_mul(factor),
                height: pixel_size.height.saturating_mul(factor),
            },
            Self::Down(factor) => PixelSize {
                width: pixel_size.width.div_ceil(factor).max(1),
                height: pixel_size.height.div_ceil(factor).max(1),
            },
        }
    }
}

/// Encode `image` as an 8-bit RGBA PNG.
///
/// # Errors
///
/// Returns [`Error::Png`](crate::Error::Png) if encoding fails.
pub fn encode_png(image: &RenderedImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    write_rgba(&mut bytes, image.pixel_size(), image.as_rgba())?;
    Ok(bytes)
}

/// Write `image` to `output_path` as a PNG, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) or [`Error::Png`](crate::Error::Png).
pub fn write_png(image: &RenderedImage, output_path: impl AsRef<Path>) -> Result<()> {
    let output_path = output_path.as_ref();
    create_parent_dir(output_path)?;
    let file = File::create(output_path)?;
    write_rgba(BufWriter::new(file), image.pixel_size(), image.as_rgba())?;
    log::info!(
        "wrote {} PNG to {}",
        image.pixel_size(),
        output_path.display()
    );
    Ok(())
}

/// Write a preview of `image` whose larger side is as close as possible to
/// `target_max_dimension` without exceeding it, using an integer scale factor.
///
/// Images already larger than the target are shrunk; smaller ones are magnified.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) or [`Error::Png`](crate::Error::Png).
///
/// # Panics
///
/// Panics if `target_max_dimension` is zero.
pub fn write_preview_png(
    image: &RenderedImage,
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
) -> Result<()> {
    let scale = select_scale(image.pixel_size(), target_max_dimension);
    log::debug!("preview scale {scale:?} for target {target_max_dimension}px");
    write_png(&scale_image(image, scale), output_path)
}

/// Pick the integer scale that brings the larger side closest to `target_max_dimension`
/// from below.
///
/// # Panics
///
/// Panics if `target_max_dimension` is zero.
#[must_use]
pub fn select_scale(pixel_size: PixelSize, target_max_dimension: u32) -> Scale {
    assert!(
        target_max_dimension > 0,
        "target_max_dimension must be positive"
    );
    let max_dimension = pixel_size.width.max(pixel_size.height).max(1);
    if max_dimension <= target_max_dimension {
        Scale::Up(target_max_dimension / max_dimension)
    } else {
        Scale::Down(max_dimension.div_ceil(target_max_dimension))
    }
}

/// Nearest-neighbor rescale of `image`.
///
/// # Panics
///
/// Panics if the factor is zero.
#[must_use]
pub fn scale_image(image: &RenderedImage, scale: Scale) -> RenderedImage {
    let (factor, upscale) = match scale {
        Scale::Up(factor) => (factor, true),
        Scale::Down(factor) => (factor, false),
    };
    assert!(factor > 0, "scale factor must be positive");
    let pixel_size = scale.apply(image.pixel_size());
    let source = image.as_rgba();
    let source_width = image.width() as usize;
    let mut scaled = Vec::with_capacity(pixel_size.pixel_count() as usize * CHANNELS);
    for y in 0..pixel_size.height {
        let source_y = if upscale { y / factor } else { y * factor };
        for x in 0..pixel_size.width {
            let source_x = if upscale { x / factor } else { x * factor };
            let offset = (source_y as usize * source_width + source_x as usize) * CHANNELS;
            scaled.extend_from_slice(&source[offset..offset + CHANNELS]);
        }
    }
    RenderedImage::from_rgba(pixel_size, scaled)
}

fn write_rgba(output: impl Write, pixel_size: PixelSize, rgba: &[u8]) -> Result<()> {
    let mut encoder = Encoder::new(output, pixel_size.width, pixel_size.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    writer.finish()?;
    Ok(())
}

fn create_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
