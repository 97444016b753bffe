//! Wall synthesis: background, then every cabinet with its modules, border and label.
//!
//! [`synthesize`] is the one-call entry point. It validates the configuration, allocates
//! a [`RenderedImage`] of [`compute_resolution`](crate::compute_resolution) size (truncated
//! to whole pixels), and paints it in this order:
//!
//! 1. the background ([`paint_background`]),
//! 2. for each cabinet, `cx` in the outer loop and `cy` in the inner loop
//!    ([`paint_cabinet`]): module outlines, then the cabinet border, then the label.
//!
//! The individual painters are public and generic over any
//! [`DrawTarget<Color = Rgb888>`](embedded_graphics::draw_target::DrawTarget), so the
//! same wall can be drawn onto another embedded-graphics surface with [`paint_wall`].
//!
//! Fractional positions snap down to the pixel grid: a span from `a` to `b` covers
//! columns `floor(a)..floor(b)`.

pub mod background;
pub mod cabinet;
pub mod label;
pub mod module_grid;

pub use background::{paint_background, radial_gray_level, sawtooth_gray_level};
pub use cabinet::{CabinetLabel, cabinet_label, cabinet_center, cabinet_origin, paint_cabinet};
pub use label::{LabelFont, draw_label};
pub use module_grid::paint_module_grid;

use embedded_graphics::{
    draw_target::DrawTarget,
    pixelcolor::Rgb888,
    geometry::{Point, Size},
    primitives::Rectangle,
};
use itertools::iproduct;

use crate::color::{ColorSource, RandomColors};
use crate::grid_config::{GridConfig, GridSpec};
use crate::surface::RenderedImage;
use crate::Result;

/// Render `config` with a fresh random color for every cabinet border.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`](crate::Error::InvalidGeometry) or
/// [`Error::InvalidStyle`](crate::Error::InvalidStyle) before anything is drawn.
///
/// ```rust
/// use ledwall_grid::{GridConfig, compute_resolution, synthesize};
///
/// let config = GridConfig::default();
/// let image = synthesize(&config)?;
/// assert_eq!(image.pixel_size(), compute_resolution(&config)?.pixel_size());
/// # Ok::<(), ledwall_grid::Error>(())
/// ```
pub fn synthesize(config: &GridConfig) -> Result<RenderedImage> {
    synthesize_with(config, &mut RandomColors::new())
}

/// Render `config`, taking cabinet border colors from `border_colors`.
///
/// `border_colors` is asked for exactly one color per cabinet, in drawing order.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`](crate::Error::InvalidGeometry) or
/// [`Error::InvalidStyle`](crate::Error::InvalidStyle) before anything is drawn.
pub fn synthesize_with(
    config: &GridConfig,
    border_colors: &mut impl ColorSource,
) -> Result<RenderedImage> {
    let spec = config.validate()?;
    Ok(render_spec(&spec, border_colors))
}

/// Render an already validated [`GridSpec`].
#[must_use]
pub fn render_spec(spec: &GridSpec, border_colors: &mut impl ColorSource) -> RenderedImage {
    let geometry = spec.geometry();
    let resolution = geometry.resolution();
    log::debug!(
        "rendering {resolution} wall: {} cabinets, pattern {}, modules {}",
        geometry.cabinet_count(),
        spec.background_pattern().name(),
        if spec.show_modules() { "shown" } else { "hidden" },
    );
    let font = LabelFont::for_size(spec.style().font_size);
    log::debug!(
        "labels {}px: {:?} x{}",
        spec.style().font_size,
        font.face(),
        font.scale()
    );
    let mut image = RenderedImage::new(resolution.pixel_size());
    paint_wall(&mut image, spec, border_colors).unwrap_or_else(|never| match never {});
    log::info!("rendered {} wall preview", image.pixel_size());
    image
}

/// Paint the whole wall onto `target`.
///
/// # Errors
///
/// Returns any error reported by `target`.
pub fn paint_wall<D>(
    target: &mut D,
    spec: &GridSpec,
    border_colors: &mut impl ColorSource,
) -> core::result::Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    paint_background(target, spec)?;
    let geometry = spec.geometry();
    for (cabinet_x, cabinet_y) in iproduct!(0..geometry.cabinets_x(), 0..geometry.cabinets_y()) {
        let border_color = border_colors.next_color();
        paint_cabinet(target, spec, cabinet_x, cabinet_y, border_color)?;
    }
    Ok(())
}

/// Pixel column or row containing position `value`. Validated walls stay within `i32`.
fn pixel_floor(value: f64) -> i32 {
    // `as` saturates.
    value.floor() as i32
}

/// Whole-pixel rectangle covering `left..right` by `top..bottom`.
fn pixel_span(left: f64, top: f64, right: f64, bottom: f64) -> Rectangle {
    let top_left = Point::new(pixel_floor(left), pixel_floor(top));
    let bottom_right = Point::new(pixel_floor(right), pixel_floor(bottom));
    let extent = bottom_right - top_left;
    Rectangle::new(
        top_left,
        Size::new(extent.x.unsigned_abs(), extent.y.unsigned_abs()),
    )
}
