//! Overall size of a wall: the exact [`Resolution`] and the raster [`PixelSize`].

use core::fmt;

use embedded_graphics::geometry::Size;

use crate::{GridConfig, Result};

/// Width and height implied by a configuration's geometry, computed exactly.
///
/// Module sizes may be fractional, so the product need not be a whole number.
/// Displays like the status line, `1920 x 1080`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    /// `moduleWidth × modulesX × cabinetsX`.
    pub width: f64,
    /// `moduleHeight × modulesY × cabinetsY`.
    pub height: f64,
}

impl Resolution {
    /// Raster size of an image with this resolution. Fractional sides are truncated.
    #[must_use]
    pub fn pixel_size(self) -> PixelSize {
        // Validated resolutions are within `0..=u32::MAX`; `as` truncates toward zero.
        PixelSize {
            width: self.width as u32,
            height: self.height as u32,
        }
    }

    /// `width / height`.
    #[must_use]
    pub fn aspect_ratio(self) -> f64 {
        self.width / self.height
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} x {}", self.width, self.height)
    }
}

/// Whole-pixel width and height of a raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelSize {
    /// Columns.
    pub width: u32,
    /// Rows.
    pub height: u32,
}

impl PixelSize {
    /// Total number of pixels.
    #[must_use]
    pub const fn pixel_count(self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// The size as an embedded-graphics [`Size`].
    #[must_use]
    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl fmt::Display for PixelSize {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} x {}", self.width, self.height)
    }
}

/// Compute the wall resolution from the geometry fields of `config`.
///
/// Style fields are not looked at, so this succeeds for any config with valid geometry.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`](crate::Error::InvalidGeometry) if a geometry field
/// is non-positive or non-finite, a count is not a whole number, or the wall would be
/// too large.
///
/// ```rust
/// use ledwall_grid::{GridConfig, Resolution, compute_resolution};
///
/// let resolution = compute_resolution(&GridConfig::default())?;
/// assert_eq!(resolution, Resolution { width: 1920.0, height: 1080.0 });
/// assert_eq!(resolution.to_string(), "1920 x 1080");
/// # Ok::<(), ledwall_grid::Error>(())
/// ```
pub fn compute_resolution(config: &GridConfig) -> Result<Resolution> {
    Ok(config.geometry()?.resolution())
}
