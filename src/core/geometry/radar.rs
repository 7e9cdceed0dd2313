use crate::core::geometry::line::{connect_points, point_markers};
use crate::core::geometry::{
    Fragment, GeometryBuilder, GeometryContext, SeriesGeometry, Shape, point_region,
};
use crate::core::style::ChartStyle;
use crate::core::types::PixelPoint;

const RADAR_RADIUS_FRACTION: f64 = 0.9;

/// Radar, radar-with-markers and radar-area styles.
///
/// Category `i` sits at `i * 360 / categories` degrees clockwise from
/// 12 o'clock; the value maps linearly to the distance from the center.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadarBuilder;

impl GeometryBuilder for RadarBuilder {
    fn build(&self, context: &GeometryContext<'_>, position: usize) -> SeriesGeometry {
        let mut geometry = SeriesGeometry::default();
        let Some(series) = context.participants.get(position) else {
            return geometry;
        };

        let categories = context.scale.category_range(context.style).span().max(1.0);
        let values = context.scale.value_range(context.style);
        let center = context.viewport.center();
        let radius = context.viewport.width_px().min(context.viewport.height_px()) / 2.0
            * RADAR_RADIUS_FRACTION;
        let angle_step = 360.0 / categories;

        let points: Vec<PixelPoint> = (0..series.len())
            .map(|index| {
                let distance = values.fraction(series.plain_at(index)).max(0.0) * radius;
                center.polar_offset(distance, angle_step * index as f64)
            })
            .collect();

        if context.style == ChartStyle::RadarArea && points.len() > 2 {
            geometry.fragments.push(Fragment::series_path(Shape::Polygon {
                points: points.clone(),
            }));
        } else {
            geometry
                .fragments
                .extend(connect_points(&points, false, points.len() > 2));
        }
        if context.style.has_markers() || points.len() == 1 {
            geometry.fragments.extend(point_markers(context, &points));
        }

        let size = context.hit_size();
        geometry.hit_regions = points
            .iter()
            .enumerate()
            .map(|(index, point)| point_region(index, *point, size))
            .collect();
        geometry
    }
}
