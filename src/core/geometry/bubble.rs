use crate::core::geometry::{
    BrushRole, Fragment, GeometryBuilder, GeometryContext, HitRegion, SeriesGeometry, Shape,
};
use crate::core::primitives::finite_max;
use crate::core::types::PixelRect;

const MAX_RADIUS_VIEWPORT_FRACTION: f64 = 0.125;

/// Bubbles centered on (index, value) with area proportional to `|value|`.
///
/// The largest magnitude among all participants gets the maximum radius:
/// half a category slot, capped to an eighth of the smaller viewport side.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleBuilder;

impl GeometryBuilder for BubbleBuilder {
    fn build(&self, context: &GeometryContext<'_>, position: usize) -> SeriesGeometry {
        let mut geometry = SeriesGeometry::default();
        let Some(series) = context.participants.get(position) else {
            return geometry;
        };

        let largest = finite_max(
            context
                .participants
                .iter()
                .flat_map(|item| item.values().iter())
                .filter_map(|value| value.plain_value().ok())
                .map(f64::abs),
        )
        .unwrap_or(0.0);
        if largest <= 0.0 {
            return geometry;
        }

        let mapping = context.mapping();
        let max_radius = (mapping.slot_width() / 2.0).min(
            context.viewport.width_px().min(context.viewport.height_px())
                * MAX_RADIUS_VIEWPORT_FRACTION,
        );
        for index in 0..series.len() {
            let value = series.plain_at(index);
            let radius = max_radius * (value.abs() / largest).sqrt();
            let center = mapping.point(index, value);
            geometry.fragments.push(Fragment::for_value(
                Shape::Ellipse {
                    center,
                    radius_x: radius,
                    radius_y: radius,
                },
                BrushRole::Main,
                index,
            ));
            geometry.hit_regions.push(HitRegion::rect(
                index,
                PixelRect::centered(center, radius * 2.0, radius * 2.0),
                center,
            ));
        }
        geometry
    }
}
