use crate::core::geometry::mapping::BAR_GROUP_FRACTION;
use crate::core::geometry::{
    BrushRole, Fragment, GeometryBuilder, GeometryContext, HitRegion, SeriesGeometry, Shape,
};

/// Waterfall: each bar spans `[running, running + value]` and the running
/// total carries over to the next index. Rises use the main brush, falls the
/// secondary one.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaterfallBuilder;

impl GeometryBuilder for WaterfallBuilder {
    fn build(&self, context: &GeometryContext<'_>, position: usize) -> SeriesGeometry {
        let mut geometry = SeriesGeometry::default();
        let Some(series) = context.participants.get(position) else {
            return geometry;
        };

        let mapping = context.mapping();
        let slot = mapping.slot_width();
        let width = slot * BAR_GROUP_FRACTION;
        let gap = (slot - width) / 2.0;

        let mut running = 0.0;
        for index in 0..series.len() {
            let value = series.plain_at(index);
            let rect = mapping.band(
                mapping.slot_start(index) + gap,
                width,
                running,
                running + value,
            );
            running += value;

            let role = if value < 0.0 {
                BrushRole::Secondary
            } else {
                BrushRole::Main
            };
            geometry
                .fragments
                .push(Fragment::for_value(Shape::Rect(rect), role, index));
            geometry
                .hit_regions
                .push(HitRegion::rect(index, rect, rect.center()));
        }
        geometry
    }
}
