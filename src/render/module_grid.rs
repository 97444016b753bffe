//! Module outlines inside one cabinet.

use embedded_graphics::{
    draw_target::DrawTarget,
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyleBuilder, StrokeAlignment},
};
use itertools::iproduct;

use super::pixel_span;
use crate::color::ToRgb888;
use crate::grid_config::GridSpec;

/// Outline every module of the cabinet whose top-left corner is `cabinet_origin`.
///
/// Each outline is one pixel wide and lies on the module's own edge pixels, so adjacent
/// modules show a two-pixel seam. The stroke width does not follow the cabinet stroke.
/// Callers decide whether modules are shown; this always draws.
///
/// # Errors
///
/// Returns any error reported by `target`.
pub fn paint_module_grid<D>(
    target: &mut D,
    spec: &GridSpec,
    cabinet_origin: (f64, f64),
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let geometry = spec.geometry();
    let outline = PrimitiveStyleBuilder::new()
        .stroke_color(spec.style().module_stroke_color.to_rgb888())
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    let (module_width, module_height) = (geometry.module_width(), geometry.module_height());
    let (origin_x, origin_y) = cabinet_origin;

    for (module_x, module_y) in iproduct!(0..geometry.modules_x(), 0..geometry.modules_y()) {
        let left = origin_x + f64::from(module_x) * module_width;
        let top = origin_y + f64::from(module_y) * module_height;
        pixel_span(left, top, left + module_width, top + module_height)
            .into_styled(outline)
            .draw(target)?;
    }
    Ok(())
}
