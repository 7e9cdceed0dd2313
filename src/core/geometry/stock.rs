use crate::core::geometry::{
    BrushRole, Fragment, GeometryBuilder, GeometryContext, HitRegion, SeriesGeometry, Shape,
};
use crate::core::style::ChartStyle;
use crate::core::types::{PixelPoint, PixelRect};

const TICK_SLOT_FRACTION: f64 = 0.3;
const MAX_TICK_PX: f64 = 12.0;

/// High-low-close and open-high-low-close bars.
///
/// Each index draws a low→high stem, a close tick pointing forward and, for
/// OHLC, an open tick pointing backward. OHLC colors by `close` vs `open`;
/// HLC colors by `close` vs the previous close.
#[derive(Debug, Clone, Copy, Default)]
pub struct StockBuilder;

impl GeometryBuilder for StockBuilder {
    fn build(&self, context: &GeometryContext<'_>, position: usize) -> SeriesGeometry {
        let mut geometry = SeriesGeometry::default();
        let Some(series) = context.participants.get(position) else {
            return geometry;
        };

        let mapping = context.mapping();
        let tick = (mapping.slot_width() * TICK_SLOT_FRACTION).min(MAX_TICK_PX);
        let forward = tick * mapping.forward_sign();
        let with_open = context.style == ChartStyle::OpenHighLowClose;

        let mut previous_close: Option<f64> = None;
        for (index, value) in series.values().iter().enumerate() {
            let (Ok(high), Ok(low), Ok(close)) =
                (value.high_value(), value.low_value(), value.close_value())
            else {
                continue;
            };
            let open = if with_open {
                value.open_value().ok()
            } else {
                None
            };

            let rising = match open {
                Some(open) => close >= open,
                None => previous_close.is_none_or(|previous| close >= previous),
            };
            previous_close = Some(close);
            let role = if rising {
                BrushRole::Main
            } else {
                BrushRole::Secondary
            };

            let x = mapping.mirror_x(mapping.category_position(index));
            let high_y = mapping.value_position(high);
            let low_y = mapping.value_position(low);
            let close_y = mapping.value_position(close);

            geometry.fragments.push(Fragment::for_value(
                Shape::Line {
                    from: PixelPoint::new(x, high_y),
                    to: PixelPoint::new(x, low_y),
                },
                role,
                index,
            ));
            geometry.fragments.push(Fragment::for_value(
                Shape::Line {
                    from: PixelPoint::new(x, close_y),
                    to: PixelPoint::new(x + forward, close_y),
                },
                role,
                index,
            ));
            if let Some(open) = open {
                let open_y = mapping.value_position(open);
                geometry.fragments.push(Fragment::for_value(
                    Shape::Line {
                        from: PixelPoint::new(x - forward, open_y),
                        to: PixelPoint::new(x, open_y),
                    },
                    role,
                    index,
                ));
            }

            let bounds = PixelRect::from_corners(
                PixelPoint::new(x - tick, high_y),
                PixelPoint::new(x + tick, low_y),
            );
            geometry
                .hit_regions
                .push(HitRegion::rect(index, bounds, PixelPoint::new(x, close_y)));
        }
        geometry
    }
}
