use crate::core::geometry::{
    BrushRole, Fragment, GeometryBuilder, GeometryContext, HitRegion, SeriesGeometry, Sector,
    Shape,
};
use crate::core::series::pie_amount;
use crate::core::style::ChartStyle;
use crate::core::types::Viewport;

const PIE_RADIUS_FRACTION: f64 = 0.9;
const DOUGHNUT_HOLE_FRACTION: f64 = 0.5;
const SLICE_OFFSET_FRACTION: f64 = 0.1;

/// `(inner radius, outer radius, slice offset)` for a pie-family style.
///
/// Sliced pies shrink the radius so offset sectors still fit the container.
#[must_use]
pub fn pie_radii(viewport: Viewport, style: ChartStyle) -> (f64, f64, f64) {
    let available = viewport.width_px().min(viewport.height_px()) / 2.0 * PIE_RADIUS_FRACTION;
    match style {
        ChartStyle::Doughnut => (available * DOUGHNUT_HOLE_FRACTION, available, 0.0),
        ChartStyle::SlicedPie => {
            let outer = available / (1.0 + SLICE_OFFSET_FRACTION);
            (0.0, outer, outer * SLICE_OFFSET_FRACTION)
        }
        _ => (0.0, available, 0.0),
    }
}

/// Solid pie, sliced pie and doughnut.
///
/// Only visible values take part: each one spans `value / pie_total * 360`
/// degrees, starting at 12 o'clock and going clockwise. Negative values are
/// drawn as empty sectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieBuilder;

impl GeometryBuilder for PieBuilder {
    fn build(&self, context: &GeometryContext<'_>, position: usize) -> SeriesGeometry {
        let mut geometry = SeriesGeometry::default();
        let Some(series) = context.participants.get(position) else {
            return geometry;
        };

        let total = series.pie_total();
        if total <= 0.0 {
            return geometry;
        }

        let (inner_radius, outer_radius, slice_offset) = pie_radii(context.viewport, context.style);
        let center = context.viewport.center();
        let mut start_angle = 0.0;
        for (index, value) in series.values().iter().enumerate() {
            if !value.is_visible() {
                continue;
            }
            let sweep_angle = pie_amount(value) / total * 360.0;
            let bisector = start_angle + sweep_angle / 2.0;
            let sector = Sector {
                center: center.polar_offset(slice_offset, bisector),
                inner_radius,
                outer_radius,
                start_angle,
                sweep_angle,
            };
            start_angle += sweep_angle;

            geometry.fragments.push(Fragment::for_value(
                Shape::Sector(sector),
                BrushRole::Indexed(index),
                index,
            ));
            geometry.hit_regions.push(HitRegion {
                value_index: index,
                bounds: sector.bounds(),
                anchor: sector.label_anchor(),
                sector: Some(sector),
            });
        }
        geometry
    }
}
