use crate::core::geometry::CubicSegment;
use crate::core::types::PixelPoint;

/// Converts a polyline into a Catmull-Rom spline expressed as cubic Bézier
/// segments. The curve passes through every input point; tangents come from
/// the neighbouring points, with end points duplicated at the boundaries.
#[must_use]
pub fn catmull_rom_segments(points: &[PixelPoint]) -> Vec<CubicSegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let last = points.len() - 1;
    (0..last)
        .map(|i| {
            let p0 = points[i.saturating_sub(1)];
            let p1 = points[i];
            let p2 = points[i + 1];
            let p3 = points[(i + 2).min(last)];
            CubicSegment {
                control1: PixelPoint::new(p1.x + (p2.x - p0.x) / 6.0, p1.y + (p2.y - p0.y) / 6.0),
                control2: PixelPoint::new(p2.x - (p3.x - p1.x) / 6.0, p2.y - (p3.y - p1.y) / 6.0),
                end: p2,
            }
        })
        .collect()
}
