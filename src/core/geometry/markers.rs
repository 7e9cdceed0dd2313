use smallvec::SmallVec;

use crate::core::geometry::Shape;
use crate::core::style::MarkerShape;
use crate::core::types::{PixelPoint, PixelRect};

const STAR_POINTS: usize = 5;
const STAR_INNER_RATIO: f64 = 0.4;

/// Marker of `shape` centered on `center`, fitting a `size`×`size` box.
#[must_use]
pub fn marker_shape(center: PixelPoint, size: f64, shape: MarkerShape) -> Shape {
    let half = size / 2.0;
    match shape {
        MarkerShape::Circle => Shape::Ellipse {
            center,
            radius_x: half,
            radius_y: half,
        },
        MarkerShape::Square => Shape::Rect(PixelRect::centered(center, size, size)),
        MarkerShape::Diamond => polygon([
            PixelPoint::new(center.x, center.y - half),
            PixelPoint::new(center.x + half, center.y),
            PixelPoint::new(center.x, center.y + half),
            PixelPoint::new(center.x - half, center.y),
        ]),
        MarkerShape::Triangle => polygon([
            PixelPoint::new(center.x, center.y - half),
            PixelPoint::new(center.x + half, center.y + half),
            PixelPoint::new(center.x - half, center.y + half),
        ]),
        MarkerShape::Star => {
            let step = 360.0 / (STAR_POINTS * 2) as f64;
            let vertices: SmallVec<[PixelPoint; 10]> = (0..STAR_POINTS * 2)
                .map(|k| {
                    let radius = if k % 2 == 0 { half } else { half * STAR_INNER_RATIO };
                    center.polar_offset(radius, step * k as f64)
                })
                .collect();
            polygon(vertices)
        }
    }
}

fn polygon(points: impl IntoIterator<Item = PixelPoint>) -> Shape {
    Shape::Polygon {
        points: points.into_iter().collect(),
    }
}
