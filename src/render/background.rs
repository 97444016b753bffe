//! Background fills painted beneath the grid.

use embedded_graphics::{
    draw_target::DrawTarget,
    pixelcolor::Rgb888,
    prelude::*,
    primitives::Rectangle,
};
use itertools::iproduct;

use super::{pixel_floor, pixel_span};
use crate::color::{ToRgb888, gray};
use crate::grid_config::{BackgroundPattern, GridSpec};

/// Fill the background extent of `target` according to the spec's background pattern.
///
/// The extent is [`GridSpec::background_size`]; with the geometric extent it is the
/// whole wall.
///
/// # Errors
///
/// Returns any error reported by `target`.
pub fn paint_background<D>(target: &mut D, spec: &GridSpec) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let (width, height) = spec.background_size();
    let geometry = spec.geometry();
    match spec.background_pattern() {
        BackgroundPattern::None => target.fill_solid(
            &pixel_span(0.0, 0.0, width, height),
            spec.style().background_color.to_rgb888(),
        ),
        BackgroundPattern::VerticalModule => {
            paint_sawtooth(target, width, height, geometry.module_width())
        }
        BackgroundPattern::VerticalCabinet => {
            paint_sawtooth(target, width, height, geometry.cabinet_width())
        }
        BackgroundPattern::Radial => paint_radial(target, width, height),
    }
}

/// Gray level of column `x` in a sawtooth with the given period:
/// `floor((x mod period) / period * 255)`.
///
/// ```rust
/// use ledwall_grid::render::sawtooth_gray_level;
///
/// assert_eq!(sawtooth_gray_level(80, 160.0), 127);
/// assert_eq!(sawtooth_gray_level(160, 160.0), 0);
/// assert_eq!(sawtooth_gray_level(81, 160.5), 128);
/// ```
///
/// # Panics
///
/// Panics if `period` is not positive.
#[must_use]
pub fn sawtooth_gray_level(x: u32, period: f64) -> u8 {
    assert!(period > 0.0, "period must be positive");
    let phase = f64::from(x) % period;
    // phase < period, so the level stays below 255.
    (phase / period * 255.0).floor() as u8
}

/// Gray level of pixel `(x, y)` in a radial gradient over a `width × height` extent:
/// white at the center `(width/2, height/2)`, black at radius `max(width, height)/2` and
/// beyond. Distances are measured from pixel centers.
#[must_use]
pub fn radial_gray_level(x: u32, y: u32, width: f64, height: f64) -> u8 {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.max(height) / 2.0;
    if radius <= 0.0 {
        return u8::MAX;
    }
    let delta_x = f64::from(x) + 0.5 - center_x;
    let delta_y = f64::from(y) + 0.5 - center_y;
    let offset = (delta_x.hypot(delta_y) / radius).min(1.0);
    // 256 evenly spaced stops from 255 down to 0 interpolate to a straight line.
    ((1.0 - offset) * 255.0).round() as u8
}

/// Whole columns and rows of a `width × height` extent that can land on `target`.
fn raster_extent<D: DrawTarget>(target: &D, width: f64, height: f64) -> (u32, u32) {
    let target_size = target.bounding_box().size;
    (
        pixel_floor(width).unsigned_abs().min(target_size.width),
        pixel_floor(height).unsigned_abs().min(target_size.height),
    )
}

fn paint_sawtooth<D>(target: &mut D, width: f64, height: f64, period: f64) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let (columns, rows) = raster_extent(target, width, height);
    let column_size = Size::new(1, rows);
    for (x, left) in (0..columns).zip(0..) {
        let level = sawtooth_gray_level(x, period);
        target.fill_solid(
            &Rectangle::new(Point::new(left, 0), column_size),
            gray(level),
        )?;
    }
    Ok(())
}

fn paint_radial<D>(target: &mut D, width: f64, height: f64) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let (columns, rows) = raster_extent(target, width, height);
    target.draw_iter(
        iproduct!((0..rows).zip(0_i32..), (0..columns).zip(0_i32..)).map(
            |((y, row), (x, column))| {
                Pixel(
                    Point::new(column, row),
                    gray(radial_gray_level(x, y, width, height)),
                )
            },
        ),
    )
}
