//! Raster previews of modular LED video-wall layouts.
//!
//! A wall is a grid of *cabinets*, each a grid of *modules*. Given a [`GridConfig`],
//! this crate computes the wall's [`Resolution`] and [`synthesize`]s a
//! [`RenderedImage`] showing a background test pattern, the module outlines, a colored
//! border around every cabinet and a `C001`-style label anchored at each cabinet center.
//!
//! # Example
//!
//! ```rust
//! use ledwall_grid::{BackgroundPattern, GridConfig, compute_resolution, synthesize_with};
//! use ledwall_grid::color::{CyclingColors, colors};
//!
//! let config = GridConfig {
//!     background_pattern: BackgroundPattern::VerticalModule,
//!     ..GridConfig::default()
//! };
//! assert_eq!(compute_resolution(&config)?.to_string(), "1920 x 1080");
//!
//! // Fixed border colors make the render reproducible.
//! let mut border_colors = CyclingColors::new([colors::RED, colors::LIME, colors::BLUE]);
//! let image = synthesize_with(&config, &mut border_colors)?;
//! assert_eq!(image.color_at(0, 0), colors::RED);
//! # Ok::<(), ledwall_grid::Error>(())
//! ```
//!
//! # Glossary
//!
//! - **Module:** smallest rectangular tile of the wall.
//! - **Cabinet:** a `modulesX × modulesY` block of modules.
//! - **Wall:** the full `cabinetsX × cabinetsY` array of cabinets.
//! - **Resolution:** total pixel width and height implied by the geometry fields. Module
//!   sizes may be fractional; the raster is the resolution truncated to whole pixels.
//! - **Background pattern:** the fill painted beneath the grid lines.

pub mod color;
mod error;
pub mod grid_config;
pub mod render;
pub mod resolution;
pub mod surface;
#[cfg(feature = "png")]
pub mod to_png;

pub use crate::error::{Error, Result};
pub use crate::grid_config::{BackgroundExtent, BackgroundPattern, GridConfig, GridSpec};
pub use crate::render::{synthesize, synthesize_with};
pub use crate::resolution::{PixelSize, Resolution, compute_resolution};
pub use crate::surface::RenderedImage;
