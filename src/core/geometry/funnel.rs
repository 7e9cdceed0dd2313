use crate::core::geometry::{
    BrushRole, Fragment, GeometryBuilder, GeometryContext, HitRegion, SeriesGeometry, Shape,
};
use crate::core::primitives::finite_max;
use crate::core::types::{PixelPoint, PixelRect};

/// Funnel: visible values become trapezoids stacked top to bottom.
///
/// A segment's top edge is proportional to its value relative to the largest
/// value; its bottom edge matches the next segment's top so the outline stays
/// continuous. The last segment is a rectangle.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunnelBuilder;

impl GeometryBuilder for FunnelBuilder {
    fn build(&self, context: &GeometryContext<'_>, position: usize) -> SeriesGeometry {
        let mut geometry = SeriesGeometry::default();
        let Some(series) = context.participants.get(position) else {
            return geometry;
        };

        let visible: Vec<(usize, f64)> = series
            .values()
            .iter()
            .enumerate()
            .filter(|(_, value)| value.is_visible())
            .filter_map(|(index, value)| value.plain_value().ok().map(|v| (index, v.abs())))
            .collect();
        let Some(reference) = finite_max(visible.iter().map(|(_, value)| *value)) else {
            return geometry;
        };
        if reference <= 0.0 {
            return geometry;
        }

        let width = context.viewport.width_px();
        let segment_height = context.viewport.height_px() / visible.len() as f64;
        let center_x = context.mapping().mirror_x(width / 2.0);
        for (slot, (index, value)) in visible.iter().enumerate() {
            let top_width = width * value / reference;
            let bottom_width = visible
                .get(slot + 1)
                .map_or(top_width, |(_, next)| width * next / reference);
            let top = segment_height * slot as f64;
            let bottom = top + segment_height;
            let outline = vec![
                PixelPoint::new(center_x - top_width / 2.0, top),
                PixelPoint::new(center_x + top_width / 2.0, top),
                PixelPoint::new(center_x + bottom_width / 2.0, bottom),
                PixelPoint::new(center_x - bottom_width / 2.0, bottom),
            ];
            let half = top_width.max(bottom_width) / 2.0;
            let bounds = PixelRect::new(center_x - half, top, half * 2.0, segment_height);

            geometry.fragments.push(Fragment::for_value(
                Shape::Polygon { points: outline },
                BrushRole::Indexed(*index),
                *index,
            ));
            geometry
                .hit_regions
                .push(HitRegion::rect(*index, bounds, bounds.center()));
        }
        geometry
    }
}
