//! Wall configuration: the raw [`GridConfig`] snapshot filled in by a form or a JSON
//! document, and the checked [`GridSpec`] the renderers work from.
//!
//! A `GridConfig` is never mutated by this crate. Every render validates a fresh
//! snapshot, so a half-edited configuration can never leak into a drawing.

use core::convert::Infallible;
use core::str::FromStr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::{Color, parse_hex_color};
use crate::resolution::Resolution;
use crate::{Error, Result};

/// Upper bound on the number of pixels a single render may allocate (64 Mpx).
pub const MAX_PIXELS: u64 = 1 << 26;

/// Fill strategy painted beneath the grid lines.
///
/// Parsing never fails: unrecognized names fall back to [`BackgroundPattern::None`].
///
/// ```rust
/// use ledwall_grid::BackgroundPattern;
///
/// assert_eq!("verticalCabinet".parse(), Ok(BackgroundPattern::VerticalCabinet));
/// assert_eq!("checkerboard".parse(), Ok(BackgroundPattern::None));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum BackgroundPattern {
    /// Uniform `backgroundColor`.
    #[default]
    None,
    /// Grayscale sawtooth repeating every module width.
    VerticalModule,
    /// Grayscale sawtooth repeating every cabinet width.
    VerticalCabinet,
    /// White-to-black radial gradient from the wall center.
    Radial,
}

impl BackgroundPattern {
    /// Every pattern, in menu order.
    pub const ALL: [Self; 4] = [
        Self::None,
        Self::VerticalModule,
        Self::VerticalCabinet,
        Self::Radial,
    ];

    /// The configuration name of this pattern.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::VerticalModule => "verticalModule",
            Self::VerticalCabinet => "verticalCabinet",
            Self::Radial => "radial",
        }
    }
}

impl FromStr for BackgroundPattern {
    type Err = Infallible;

    fn from_str(name: &str) -> core::result::Result<Self, Self::Err> {
        let pattern = Self::ALL
            .into_iter()
            .find(|pattern| pattern.name().eq_ignore_ascii_case(name.trim()));
        if pattern.is_none() {
            log::warn!("unknown background pattern {name:?}, using solid fill");
        }
        Ok(pattern.unwrap_or_default())
    }
}

impl From<String> for BackgroundPattern {
    fn from(name: String) -> Self {
        let Ok(pattern) = name.parse::<Self>();
        pattern
    }
}

/// Which height the background renderer uses for its fill extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BackgroundExtent {
    /// `moduleHeight × modulesY × cabinetsY`, the true wall height.
    #[default]
    Geometric,
    /// `moduleWidth × modulesX × cabinetsY`, as if modules were square.
    ///
    /// Reproduces older previews. When modules are not square the background either
    /// stops short of the bottom edge (left transparent) or is clipped, and the radial
    /// center moves accordingly.
    SquareModules,
}

/// Raw wall configuration, as entered in a form or loaded from JSON.
///
/// Field names serialize in camelCase (`moduleWidth`, `cabinetsX`, ...). Missing fields
/// take their [`Default`] values, which match the stock 1920×1080 wall.
///
/// ```rust
/// use ledwall_grid::{GridConfig, compute_resolution};
///
/// let config = GridConfig::from_json(r#"{ "cabinetsX": 6, "showModules": false }"#)?;
/// assert_eq!(compute_resolution(&config)?.to_string(), "3840 x 1080");
/// # Ok::<(), ledwall_grid::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Pixels per module, horizontally.
    pub module_width: f64,
    /// Pixels per module, vertically.
    pub module_height: f64,
    /// Modules per cabinet, horizontally.
    pub modules_x: f64,
    /// Modules per cabinet, vertically.
    pub modules_y: f64,
    /// Cabinets across the wall.
    pub cabinets_x: f64,
    /// Cabinets down the wall.
    pub cabinets_y: f64,
    /// Cabinet border width in pixels; `0` draws no border.
    #[serde(alias = "strokeWidthCabinet")]
    pub cabinet_stroke_width: f64,
    /// Module outline color (hex).
    pub module_stroke_color: String,
    /// Whether module outlines are drawn.
    pub show_modules: bool,
    /// Label glyph height in pixels.
    pub font_size: f64,
    /// Label color (hex).
    pub font_color: String,
    /// Fill color for [`BackgroundPattern::None`] (hex).
    pub background_color: String,
    /// Background fill strategy.
    pub background_pattern: BackgroundPattern,
    /// Background extent formula.
    pub background_extent: BackgroundExtent,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            module_width: 160.0,
            module_height: 180.0,
            modules_x: 4.0,
            modules_y: 2.0,
            cabinets_x: 3.0,
            cabinets_y: 3.0,
            cabinet_stroke_width: 1.0,
            module_stroke_color: "#c0c0c0".to_owned(),
            show_modules: true,
            font_size: 50.0,
            font_color: "#808080".to_owned(),
            background_color: "#FFFFFF".to_owned(),
            background_pattern: BackgroundPattern::None,
            background_extent: BackgroundExtent::Geometric,
        }
    }
}

impl GridConfig {
    /// Parse a JSON configuration document. Missing fields take default values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the document is not valid JSON for this type.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`] if it
    /// cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Check the six geometry fields.
    ///
    /// Module sizes may be any positive number. The four counts must be positive whole
    /// numbers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] if a field is out of range or the resulting wall
    /// is too large to allocate.
    pub fn geometry(&self) -> Result<Geometry> {
        let module_width = positive("moduleWidth", self.module_width)?;
        let module_height = positive("moduleHeight", self.module_height)?;
        let modules_x = whole_count("modulesX", self.modules_x)?;
        let modules_y = whole_count("modulesY", self.modules_y)?;
        let cabinets_x = whole_count("cabinetsX", self.cabinets_x)?;
        let cabinets_y = whole_count("cabinetsY", self.cabinets_y)?;

        let geometry = Geometry {
            module_width,
            module_height,
            modules_x,
            modules_y,
            cabinets_x,
            cabinets_y,
        };
        let resolution = geometry.resolution();
        if resolution.width > f64::from(u32::MAX) {
            return Err(Error::geometry(
                "cabinetsX",
                format!("makes the wall too wide: {}", resolution.width),
            ));
        }
        if resolution.height > f64::from(u32::MAX) {
            return Err(Error::geometry(
                "cabinetsY",
                format!("makes the wall too tall: {}", resolution.height),
            ));
        }
        let pixel_size = resolution.pixel_size();
        if pixel_size.width == 0 {
            return Err(Error::geometry(
                "moduleWidth",
                format!("gives a wall narrower than one pixel: {resolution}"),
            ));
        }
        if pixel_size.height == 0 {
            return Err(Error::geometry(
                "moduleHeight",
                format!("gives a wall shorter than one pixel: {resolution}"),
            ));
        }
        if pixel_size.pixel_count() > MAX_PIXELS || geometry.cabinet_count() > MAX_PIXELS {
            return Err(Error::geometry(
                "cabinetsX",
                format!(
                    "gives {pixel_size} pixels in {} cabinets, more than {MAX_PIXELS}",
                    geometry.cabinet_count()
                ),
            ));
        }
        Ok(geometry)
    }

    /// Check every field and resolve colors.
    ///
    /// Geometry is checked first, so a config that is wrong in both respects reports
    /// [`Error::InvalidGeometry`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] or [`Error::InvalidStyle`] for the first bad field.
    pub fn validate(&self) -> Result<GridSpec> {
        let geometry = self.geometry()?;

        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(Error::style(
                "fontSize",
                format!("must be a positive number, got {}", self.font_size),
            ));
        }
        if !self.cabinet_stroke_width.is_finite() || self.cabinet_stroke_width < 0.0 {
            return Err(Error::style(
                "cabinetStrokeWidth",
                format!(
                    "must be a non-negative number, got {}",
                    self.cabinet_stroke_width
                ),
            ));
        }

        let style = Style {
            module_stroke_color: parse_hex_color("moduleStrokeColor", &self.module_stroke_color)?,
            font_color: parse_hex_color("fontColor", &self.font_color)?,
            background_color: parse_hex_color("backgroundColor", &self.background_color)?,
            font_size: self.font_size,
            // `as` saturates, so absurd widths just cover the whole cabinet.
            cabinet_stroke_width: self.cabinet_stroke_width.round() as u32,
        };

        Ok(GridSpec {
            geometry,
            style,
            show_modules: self.show_modules,
            background_pattern: self.background_pattern,
            background_extent: self.background_extent,
        })
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::geometry(field, format!("must be finite, got {value}")));
    }
    if value <= 0.0 {
        return Err(Error::geometry(field, format!("must be positive, got {value}")));
    }
    Ok(value)
}

fn whole_count(field: &'static str, value: f64) -> Result<u32> {
    let value = positive(field, value)?;
    if value.fract() != 0.0 {
        return Err(Error::geometry(
            field,
            format!("must be a whole number, got {value}"),
        ));
    }
    if value > f64::from(u32::MAX) {
        return Err(Error::geometry(field, format!("is too large: {value}")));
    }
    Ok(value as u32)
}

/// Validated wall geometry, obtained from [`GridConfig::geometry`].
///
/// The wall fits in `u32` on both axes and in [`MAX_PIXELS`]. Fields are private, so an
/// unchecked geometry cannot be built:
///
/// ```compile_fail
/// use ledwall_grid::grid_config::Geometry;
///
/// let geometry = Geometry {
///     module_width: 70_000.0,
///     module_height: 1.0,
///     modules_x: 70_000,
///     modules_y: 1,
///     cabinets_x: 1,
///     cabinets_y: 1,
/// };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    module_width: f64,
    module_height: f64,
    modules_x: u32,
    modules_y: u32,
    cabinets_x: u32,
    cabinets_y: u32,
}

impl Geometry {
    /// Pixels per module, horizontally.
    #[must_use]
    pub const fn module_width(&self) -> f64 {
        self.module_width
    }

    /// Pixels per module, vertically.
    #[must_use]
    pub const fn module_height(&self) -> f64 {
        self.module_height
    }

    /// Modules per cabinet, horizontally.
    #[must_use]
    pub const fn modules_x(&self) -> u32 {
        self.modules_x
    }

    /// Modules per cabinet, vertically.
    #[must_use]
    pub const fn modules_y(&self) -> u32 {
        self.modules_y
    }

    /// Cabinets across the wall.
    #[must_use]
    pub const fn cabinets_x(&self) -> u32 {
        self.cabinets_x
    }

    /// Cabinets down the wall.
    #[must_use]
    pub const fn cabinets_y(&self) -> u32 {
        self.cabinets_y
    }

    /// Cabinet width in pixels.
    #[must_use]
    pub fn cabinet_width(&self) -> f64 {
        self.module_width * f64::from(self.modules_x)
    }

    /// Cabinet height in pixels.
    #[must_use]
    pub fn cabinet_height(&self) -> f64 {
        self.module_height * f64::from(self.modules_y)
    }

    /// Exact whole-wall size.
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        Resolution {
            width: self.cabinet_width() * f64::from(self.cabinets_x),
            height: self.cabinet_height() * f64::from(self.cabinets_y),
        }
    }

    /// Number of cabinets in the wall.
    #[must_use]
    pub const fn cabinet_count(&self) -> u64 {
        self.cabinets_x as u64 * self.cabinets_y as u64
    }
}

/// Resolved styling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    /// Module outline color.
    pub module_stroke_color: Color,
    /// Label color.
    pub font_color: Color,
    /// Solid background color.
    pub background_color: Color,
    /// Label glyph height in pixels.
    pub font_size: f64,
    /// Cabinet border width in whole pixels.
    pub cabinet_stroke_width: u32,
}

/// A fully validated configuration, obtained from [`GridConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    geometry: Geometry,
    style: Style,
    show_modules: bool,
    background_pattern: BackgroundPattern,
    background_extent: BackgroundExtent,
}

impl GridSpec {
    /// Wall geometry.
    #[must_use]
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Colors, font size and stroke width.
    #[must_use]
    pub const fn style(&self) -> &Style {
        &self.style
    }

    /// Whether module outlines are drawn.
    #[must_use]
    pub const fn show_modules(&self) -> bool {
        self.show_modules
    }

    /// Background fill strategy.
    #[must_use]
    pub const fn background_pattern(&self) -> BackgroundPattern {
        self.background_pattern
    }

    /// Background extent formula.
    #[must_use]
    pub const fn background_extent(&self) -> BackgroundExtent {
        self.background_extent
    }

    /// Width and height the background renderer fills, per [`BackgroundExtent`].
    #[must_use]
    pub fn background_size(&self) -> (f64, f64) {
        let geometry = &self.geometry;
        let resolution = geometry.resolution();
        match self.background_extent {
            BackgroundExtent::Geometric => (resolution.width, resolution.height),
            BackgroundExtent::SquareModules => (
                resolution.width,
                geometry.cabinet_width() * f64::from(geometry.cabinets_y),
            ),
        }
    }
}
