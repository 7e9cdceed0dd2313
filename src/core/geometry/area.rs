use crate::core::geometry::line::point_markers;
use crate::core::geometry::{
    Fragment, GeometryBuilder, GeometryContext, HitRegion, SeriesGeometry, Shape, stack_extents,
};
use crate::core::style::StackMode;
use crate::core::types::{PixelPoint, PixelRect};

/// Area styles: the line of each series closed down to the baseline, or to
/// the layer beneath it when stacked.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaBuilder;

impl GeometryBuilder for AreaBuilder {
    fn build(&self, context: &GeometryContext<'_>, position: usize) -> SeriesGeometry {
        let mapping = context.mapping();
        let mode = context.style.stack_mode();
        let extents = stack_extents(context.participants, position, mode);

        let upper: Vec<PixelPoint> = extents
            .iter()
            .enumerate()
            .map(|(index, extent)| mapping.point(index, extent.upper))
            .collect();
        let lower: Vec<PixelPoint> = extents
            .iter()
            .enumerate()
            .map(|(index, extent)| match mode {
                StackMode::None => mapping.orient(
                    mapping.category_position(index),
                    mapping.baseline_position(),
                ),
                StackMode::Stacked | StackMode::FullStacked => mapping.point(index, extent.lower),
            })
            .collect();

        let mut geometry = SeriesGeometry::default();
        if upper.len() == 1 {
            geometry.fragments.extend(point_markers(context, &upper));
        } else {
            let mut outline = upper.clone();
            outline.extend(lower.iter().rev().copied());
            geometry
                .fragments
                .push(Fragment::series_path(Shape::Polygon { points: outline }));
        }

        let size = context.hit_size();
        geometry.hit_regions = upper
            .iter()
            .zip(&lower)
            .enumerate()
            .map(|(index, (top, bottom))| {
                let half = size / 2.0;
                let bounds = PixelRect::from_corners(*top, *bottom).inflate(half, half);
                HitRegion::rect(index, bounds, *top)
            })
            .collect();
        geometry
    }
}
