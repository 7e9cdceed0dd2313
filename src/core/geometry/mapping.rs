use crate::core::axis::AxisRange;
use crate::core::style::{ChartBoundary, FlowDirection};
use crate::core::types::{PixelPoint, PixelRect, Viewport};

/// Fraction of a category slot occupied by bars; the rest is split evenly
/// into gaps on both sides.
pub const BAR_GROUP_FRACTION: f64 = 0.8;

/// Data space → pixel space mapping for cartesian styles.
///
/// Positions are first computed along the category axis and the value axis,
/// then oriented: vertical charts put categories on X, horizontal bar charts
/// put categories on Y (index 0 at the top). Right-to-left flow mirrors X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotMapping {
    viewport: Viewport,
    category: AxisRange,
    value: AxisRange,
    boundary: ChartBoundary,
    flow: FlowDirection,
    horizontal: bool,
}

impl PlotMapping {
    #[must_use]
    pub fn new(
        viewport: Viewport,
        category: AxisRange,
        value: AxisRange,
        boundary: ChartBoundary,
        flow: FlowDirection,
        horizontal: bool,
    ) -> Self {
        Self {
            viewport,
            category,
            value,
            boundary,
            flow,
            horizontal,
        }
    }

    fn category_extent(&self) -> f64 {
        if self.horizontal {
            self.viewport.height_px()
        } else {
            self.viewport.width_px()
        }
    }

    fn value_extent(&self) -> f64 {
        if self.horizontal {
            self.viewport.width_px()
        } else {
            self.viewport.height_px()
        }
    }

    /// Width of one category slot along the category axis.
    #[must_use]
    pub fn slot_width(&self) -> f64 {
        self.category_extent() / self.category.span()
    }

    /// Distance between consecutive category positions for point styles.
    #[must_use]
    pub fn category_step(&self) -> f64 {
        match self.boundary {
            ChartBoundary::WithOffset => self.slot_width(),
            ChartBoundary::WithoutOffset if self.category.span() > 1.0 => {
                self.category_extent() / (self.category.span() - 1.0)
            }
            ChartBoundary::WithoutOffset => self.category_extent(),
        }
    }

    /// Position of category `index` along the category axis, honoring the
    /// boundary mode.
    #[must_use]
    pub fn category_position(&self, index: usize) -> f64 {
        let offset = index as f64 - self.category.min;
        match self.boundary {
            ChartBoundary::WithOffset => (offset + 0.5) * self.slot_width(),
            ChartBoundary::WithoutOffset => offset * self.category_step(),
        }
    }

    /// Start of the slot of category `index`. Slots always use the offset
    /// layout so bars never straddle the plot edges.
    #[must_use]
    pub fn slot_start(&self, index: usize) -> f64 {
        (index as f64 - self.category.min) * self.slot_width()
    }

    /// Position of `value` along the value axis, in oriented pixel units
    /// (already inverted for vertical charts).
    #[must_use]
    pub fn value_position(&self, value: f64) -> f64 {
        let fraction = self.value.fraction(value);
        if self.horizontal {
            fraction * self.value_extent()
        } else {
            self.value_extent() - fraction * self.value_extent()
        }
    }

    /// Value-axis position of zero, clamped into the visible range.
    #[must_use]
    pub fn baseline_position(&self) -> f64 {
        self.value_position(0.0_f64.clamp(self.value.min, self.value.max))
    }

    /// Orients a (category, value) position pair into pixel space.
    #[must_use]
    pub fn orient(&self, category_position: f64, value_position: f64) -> PixelPoint {
        if self.horizontal {
            PixelPoint::new(self.mirror_x(value_position), category_position)
        } else {
            PixelPoint::new(self.mirror_x(category_position), value_position)
        }
    }

    /// Pixel location of `value` at category `index`.
    #[must_use]
    pub fn point(&self, index: usize, value: f64) -> PixelPoint {
        self.orient(self.category_position(index), self.value_position(value))
    }

    /// Rectangle spanning `[category_start, category_start + category_width]`
    /// on the category axis and `[lower, upper]` in data units on the value
    /// axis.
    #[must_use]
    pub fn band(&self, category_start: f64, category_width: f64, lower: f64, upper: f64) -> PixelRect {
        let a = self.orient(category_start, self.value_position(lower));
        let b = self.orient(category_start + category_width, self.value_position(upper));
        PixelRect::from_corners(a, b)
    }

    #[must_use]
    pub fn mirror_x(&self, x: f64) -> f64 {
        match self.flow {
            FlowDirection::LeftToRight => x,
            FlowDirection::RightToLeft => self.viewport.width_px() - x,
        }
    }

    /// Horizontal sign of "forward" ticks (`+1` left-to-right, `-1` mirrored).
    #[must_use]
    pub fn forward_sign(&self) -> f64 {
        match self.flow {
            FlowDirection::LeftToRight => 1.0,
            FlowDirection::RightToLeft => -1.0,
        }
    }
}
