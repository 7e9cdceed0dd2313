pub mod axis;
pub mod format;
pub mod geometry;
pub mod legend;
pub mod palette;
pub mod primitives;
pub mod series;
pub mod style;
pub mod types;
pub mod value;

pub use axis::{AxisRange, AxisScale, AxisSettings, AxisTick};
pub use format::NumberFormat;
pub use geometry::{
    BrushRole, Fragment, GeometryContext, GeometryOptions, HitRegion, SeriesGeometry, Shape,
};
pub use legend::{
    LegendEntry, LegendLabels, LegendPair, LegendRole, LegendSource, SeriesHidePolicy,
};
pub use palette::{ColorAllocator, ColorSlot, PaletteConfig, PaletteKind};
pub use series::{Series, SeriesId};
pub use style::{
    AutoAdjust, AxisKind, ChartBoundary, ChartStyle, FlowDirection, MarkerShape, StackMode,
    StyleFamily,
};
pub use types::{PixelPoint, PixelRect, Viewport};
pub use value::{ChartValue, SeriesKind, ValueData};
