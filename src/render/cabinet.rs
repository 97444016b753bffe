//! One cabinet: its modules, border and label.

use core::fmt::Write;

use embedded_graphics::{
    draw_target::DrawTarget,
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyleBuilder, StrokeAlignment},
};

use super::{pixel_floor, pixel_span};
use super::label::{LabelFont, draw_label};
use super::module_grid::paint_module_grid;
use crate::color::{Color, ToRgb888};
use crate::grid_config::{Geometry, GridSpec};

/// Cabinet label text such as `C007`. Holds any `u64` index.
pub type CabinetLabel = heapless::String<24>;

/// Exact top-left corner of cabinet `(cabinet_x, cabinet_y)`, in pixels.
#[must_use]
pub fn cabinet_origin(geometry: &Geometry, cabinet_x: u32, cabinet_y: u32) -> (f64, f64) {
    (
        f64::from(cabinet_x) * geometry.cabinet_width(),
        f64::from(cabinet_y) * geometry.cabinet_height(),
    )
}

/// Pixel holding the geometric center of cabinet `(cabinet_x, cabinet_y)`; labels are
/// anchored here.
#[must_use]
pub fn cabinet_center(geometry: &Geometry, cabinet_x: u32, cabinet_y: u32) -> Point {
    let (left, top) = cabinet_origin(geometry, cabinet_x, cabinet_y);
    Point::new(
        pixel_floor(left + geometry.cabinet_width() / 2.0),
        pixel_floor(top + geometry.cabinet_height() / 2.0),
    )
}

/// Label of cabinet `(cabinet_x, cabinet_y)`: `C` followed by the 1-based row-major index
/// `cabinet_y * cabinets_x + cabinet_x + 1`, zero-padded to at least three digits.
///
/// ```rust
/// use ledwall_grid::{GridConfig, render::cabinet_label};
///
/// let geometry = GridConfig::default().geometry()?; // 3 x 3 cabinets
/// assert_eq!(cabinet_label(&geometry, 1, 1), "C005");
/// assert_eq!(cabinet_label(&geometry, 2, 0), "C003");
/// # Ok::<(), ledwall_grid::Error>(())
/// ```
#[must_use]
pub fn cabinet_label(geometry: &Geometry, cabinet_x: u32, cabinet_y: u32) -> CabinetLabel {
    let index =
        u64::from(cabinet_y) * u64::from(geometry.cabinets_x()) + u64::from(cabinet_x) + 1;
    let mut label = CabinetLabel::new();
    write!(label, "C{index:03}").expect("a u64 label always fits");
    label
}

/// Paint cabinet `(cabinet_x, cabinet_y)`: module outlines (when shown), then a border of
/// `border_color` lying entirely inside the cabinet, then the label anchored at the cabinet
/// center.
///
/// # Errors
///
/// Returns any error reported by `target`.
pub fn paint_cabinet<D>(
    target: &mut D,
    spec: &GridSpec,
    cabinet_x: u32,
    cabinet_y: u32,
    border_color: Color,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let geometry = spec.geometry();
    let origin = cabinet_origin(geometry, cabinet_x, cabinet_y);
    let label = cabinet_label(geometry, cabinet_x, cabinet_y);
    log::trace!("cabinet {label} at {origin:?}, border {border_color:?}");

    if spec.show_modules() {
        paint_module_grid(target, spec, origin)?;
    }

    let stroke_width = spec.style().cabinet_stroke_width;
    if stroke_width > 0 {
        let border = PrimitiveStyleBuilder::new()
            .stroke_color(border_color.to_rgb888())
            .stroke_width(stroke_width)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        let (left, top) = origin;
        pixel_span(
            left,
            top,
            left + geometry.cabinet_width(),
            top + geometry.cabinet_height(),
        )
        .into_styled(border)
        .draw(target)?;
    }

    let center = cabinet_center(geometry, cabinet_x, cabinet_y);
    let font = LabelFont::for_size(spec.style().font_size);
    draw_label(target, &label, center, spec.style().font_color, &font)
}
