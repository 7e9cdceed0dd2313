//! Series-to-pixel geometry.
//!
//! Every style family implements [`GeometryBuilder`]; shared math (coordinate
//! mapping, stacking, smoothing, markers) lives in helper modules so builders
//! stay small and side-effect free. Output is deterministic: building twice
//! from the same context yields identical geometry.

mod area;
mod bar;
mod bubble;
mod funnel;
mod line;
mod mapping;
mod markers;
mod pie;
mod radar;
mod smoothing;
mod stacking;
mod stock;
mod waterfall;

use serde::{Deserialize, Serialize};

use crate::core::axis::AxisScale;
use crate::core::series::Series;
use crate::core::style::{ChartBoundary, ChartStyle, FlowDirection, MarkerShape, StyleFamily};
use crate::core::types::{PixelPoint, PixelRect, Viewport};

pub use area::AreaBuilder;
pub use bar::BarBuilder;
pub use bubble::BubbleBuilder;
pub use funnel::FunnelBuilder;
pub use line::LineBuilder;
pub use mapping::PlotMapping;
pub use markers::marker_shape;
pub use pie::{PieBuilder, pie_radii};
pub use radar::RadarBuilder;
pub use smoothing::catmull_rom_segments;
pub use stacking::{StackExtent, stack_extents};
pub use stock::StockBuilder;
pub use waterfall::WaterfallBuilder;

/// Which series brush fills/strokes a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrushRole {
    /// Series main color.
    Main,
    /// Series secondary color (falling values, negative waterfall steps).
    Secondary,
    /// Primary palette color at this slot; used for per-value coloring in
    /// pie and funnel styles.
    Indexed(usize),
}

/// Cubic Bézier piece continuing from the previous end point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub control1: PixelPoint,
    pub control2: PixelPoint,
    pub end: PixelPoint,
}

/// Annular sector. Angles are in degrees, clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub center: PixelPoint,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
}

impl Sector {
    #[must_use]
    pub fn end_angle(self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    #[must_use]
    pub fn bisector_angle(self) -> f64 {
        self.start_angle + self.sweep_angle / 2.0
    }

    /// Point on the bisector halfway between the inner and outer radius.
    #[must_use]
    pub fn label_anchor(self) -> PixelPoint {
        let radius = (self.inner_radius + self.outer_radius) / 2.0;
        self.center.polar_offset(radius, self.bisector_angle())
    }

    #[must_use]
    pub fn contains(self, point: PixelPoint) -> bool {
        let distance = self.center.distance_to(point);
        if distance < self.inner_radius || distance > self.outer_radius {
            return false;
        }
        if self.sweep_angle >= 360.0 {
            return true;
        }
        let dx = point.x - self.center.x;
        let dy = self.center.y - point.y;
        let angle = dx.atan2(dy).to_degrees().rem_euclid(360.0);
        let relative = (angle - self.start_angle).rem_euclid(360.0);
        relative <= self.sweep_angle
    }

    #[must_use]
    pub fn bounds(self) -> PixelRect {
        PixelRect::centered(
            self.center,
            self.outer_radius * 2.0,
            self.outer_radius * 2.0,
        )
    }
}

/// One drawable primitive of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Polyline {
        points: Vec<PixelPoint>,
        closed: bool,
    },
    /// Closed, filled outline.
    Polygon { points: Vec<PixelPoint> },
    BezierPath {
        start: PixelPoint,
        segments: Vec<CubicSegment>,
        closed: bool,
    },
    Rect(PixelRect),
    Sector(Sector),
    Ellipse {
        center: PixelPoint,
        radius_x: f64,
        radius_y: f64,
    },
    Line { from: PixelPoint, to: PixelPoint },
}

impl Shape {
    /// Whether every coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Polyline { points, .. } | Self::Polygon { points } => {
                points.iter().all(|point| point.is_finite())
            }
            Self::BezierPath {
                start, segments, ..
            } => {
                start.is_finite()
                    && segments.iter().all(|segment| {
                        segment.control1.is_finite()
                            && segment.control2.is_finite()
                            && segment.end.is_finite()
                    })
            }
            Self::Rect(rect) => rect.is_finite(),
            Self::Sector(sector) => {
                sector.center.is_finite()
                    && sector.inner_radius.is_finite()
                    && sector.outer_radius.is_finite()
                    && sector.start_angle.is_finite()
                    && sector.sweep_angle.is_finite()
            }
            Self::Ellipse {
                center,
                radius_x,
                radius_y,
            } => center.is_finite() && radius_x.is_finite() && radius_y.is_finite(),
            Self::Line { from, to } => from.is_finite() && to.is_finite(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub shape: Shape,
    pub role: BrushRole,
    /// Value that produced this fragment; `None` for whole-series paths.
    pub value_index: Option<usize>,
}

impl Fragment {
    #[must_use]
    pub fn series_path(shape: Shape) -> Self {
        Self {
            shape,
            role: BrushRole::Main,
            value_index: None,
        }
    }

    #[must_use]
    pub fn for_value(shape: Shape, role: BrushRole, value_index: usize) -> Self {
        Self {
            shape,
            role,
            value_index: Some(value_index),
        }
    }
}

/// Hit-test area of one drawn value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitRegion {
    pub value_index: usize,
    pub bounds: PixelRect,
    /// Data point location in pixel space (sector label anchor for pies).
    pub anchor: PixelPoint,
    /// Exact shape for sector hits; `bounds` alone would overlap neighbours.
    pub sector: Option<Sector>,
}

impl HitRegion {
    #[must_use]
    pub fn rect(value_index: usize, bounds: PixelRect, anchor: PixelPoint) -> Self {
        Self {
            value_index,
            bounds,
            anchor,
            sector: None,
        }
    }

    #[must_use]
    pub fn contains(&self, point: PixelPoint) -> bool {
        self.bounds.contains(point) && self.sector.is_none_or(|sector| sector.contains(point))
    }
}

/// Geometry of one series for one recompute pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SeriesGeometry {
    pub series_index: usize,
    pub fragments: Vec<Fragment>,
    /// Ordered by value index.
    pub hit_regions: Vec<HitRegion>,
}

impl SeriesGeometry {
    #[must_use]
    pub fn empty(series_index: usize) -> Self {
        Self {
            series_index,
            fragments: Vec::new(),
            hit_regions: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// First hit region containing `point`, scanning in value order.
    #[must_use]
    pub fn hit_test(&self, point: PixelPoint) -> Option<&HitRegion> {
        self.hit_regions.iter().find(|region| region.contains(point))
    }

    #[must_use]
    pub fn region_for_value(&self, value_index: usize) -> Option<&HitRegion> {
        self.hit_regions
            .iter()
            .find(|region| region.value_index == value_index)
    }
}

/// Style-specific drawing knobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryOptions {
    pub boundary: ChartBoundary,
    pub flow: FlowDirection,
    pub marker_shape: MarkerShape,
    pub marker_size: f64,
    pub line_thickness: f64,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            boundary: ChartBoundary::WithOffset,
            flow: FlowDirection::LeftToRight,
            marker_shape: MarkerShape::Circle,
            marker_size: 8.0,
            line_thickness: 2.0,
        }
    }
}

/// Everything a builder needs for one pass.
#[derive(Debug, Clone, Copy)]
pub struct GeometryContext<'a> {
    pub style: ChartStyle,
    /// Visible series drawn by `style`, in collection order.
    pub participants: &'a [&'a Series],
    pub viewport: Viewport,
    pub scale: AxisScale,
    pub options: GeometryOptions,
}

impl GeometryContext<'_> {
    #[must_use]
    pub fn mapping(&self) -> PlotMapping {
        PlotMapping::new(
            self.viewport,
            self.scale.category_range(self.style),
            self.scale.value_range(self.style),
            self.options.boundary,
            self.options.flow,
            self.style.is_horizontal(),
        )
    }

    /// Side length of square hit boxes around point-like values.
    #[must_use]
    pub fn hit_size(&self) -> f64 {
        self.options
            .marker_size
            .max(self.options.line_thickness * 2.0)
            .max(MIN_HIT_SIZE_PX)
    }
}

const MIN_HIT_SIZE_PX: f64 = 8.0;

/// Capability shared by every style family.
pub trait GeometryBuilder {
    /// Builds geometry for the participant at `position`.
    ///
    /// Implementations must not fail: degenerate input yields empty geometry.
    fn build(&self, context: &GeometryContext<'_>, position: usize) -> SeriesGeometry;
}

#[must_use]
pub fn builder_for(family: StyleFamily) -> &'static dyn GeometryBuilder {
    match family {
        StyleFamily::Line => &LineBuilder,
        StyleFamily::Area => &AreaBuilder,
        StyleFamily::Bar => &BarBuilder,
        StyleFamily::Pie => &PieBuilder,
        StyleFamily::Radar => &RadarBuilder,
        StyleFamily::Waterfall => &WaterfallBuilder,
        StyleFamily::Funnel => &FunnelBuilder,
        StyleFamily::Stock => &StockBuilder,
        StyleFamily::Bubble => &BubbleBuilder,
    }
}

/// Visible series whose kind `style` can draw, in collection order.
#[must_use]
pub fn participants<'a>(
    style: ChartStyle,
    series: impl IntoIterator<Item = &'a Series>,
) -> Vec<&'a Series> {
    series
        .into_iter()
        .filter(|series| series.is_visible() && style.accepts(series.kind()))
        .collect()
}

/// Builds geometry for the participant at `position`, guarding the shared
/// degenerate cases before dispatching to the family builder.
#[must_use]
pub fn build_series_geometry(context: &GeometryContext<'_>, position: usize) -> SeriesGeometry {
    let Some(series) = context.participants.get(position) else {
        return SeriesGeometry::default();
    };
    if !context.viewport.is_valid() || series.is_empty() {
        return SeriesGeometry::empty(series.index());
    }
    if context.style.uses_single_series() && position > 0 {
        return SeriesGeometry::empty(series.index());
    }

    let mut geometry = builder_for(context.style.family()).build(context, position);
    geometry.series_index = series.index();
    geometry
}

/// Helper for builders: a square hit region centered on `anchor`.
pub(crate) fn point_region(value_index: usize, anchor: PixelPoint, size: f64) -> HitRegion {
    HitRegion::rect(value_index, PixelRect::centered(anchor, size, size), anchor)
}
