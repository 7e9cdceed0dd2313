use crate::core::geometry::{
    BrushRole, Fragment, GeometryBuilder, GeometryContext, SeriesGeometry, Shape,
    catmull_rom_segments, marker_shape, point_region, stack_extents,
};
use crate::core::types::PixelPoint;

/// Plain, stacked, full-stacked and smooth line styles, with or without
/// markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineBuilder;

impl GeometryBuilder for LineBuilder {
    fn build(&self, context: &GeometryContext<'_>, position: usize) -> SeriesGeometry {
        let mapping = context.mapping();
        let points: Vec<PixelPoint> =
            stack_extents(context.participants, position, context.style.stack_mode())
                .iter()
                .enumerate()
                .map(|(index, extent)| mapping.point(index, extent.upper))
                .collect();

        let mut geometry = SeriesGeometry::default();
        geometry.fragments.extend(connect_points(
            &points,
            context.style.is_smooth(),
            false,
        ));
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

/// Connects `points` with straight or spline segments. Fewer than two points
/// produce nothing.
pub(super) fn connect_points(points: &[PixelPoint], smooth: bool, closed: bool) -> Option<Fragment> {
    if points.len() < 2 {
        return None;
    }

    let shape = if smooth {
        let mut path = points.to_vec();
        if closed {
            path.push(points[0]);
        }
        Shape::BezierPath {
            start: points[0],
            segments: catmull_rom_segments(&path),
            closed,
        }
    } else {
        Shape::Polyline {
            points: points.to_vec(),
            closed,
        }
    };
    Some(Fragment::series_path(shape))
}

pub(super) fn point_markers<'p>(
    context: &GeometryContext<'_>,
    points: &'p [PixelPoint],
) -> impl Iterator<Item = Fragment> + 'p {
    let size = context.options.marker_size;
    let shape = context.options.marker_shape;
    points.iter().enumerate().map(move |(index, point)| {
        Fragment::for_value(marker_shape(*point, size, shape), BrushRole::Main, index)
    })
}
