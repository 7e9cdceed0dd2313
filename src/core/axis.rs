//! Axis range resolution and tick placement.

use serde::{Deserialize, Serialize};

use crate::core::format::NumberFormat;
use crate::core::primitives::{finite_max, finite_min, nice_ceiling};
use crate::core::series::Series;
use crate::core::style::{AutoAdjust, AxisKind, ChartStyle, FlowDirection, StackMode, StyleFamily};
use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_SECTIONS: u32 = 10;

/// Effective range of one axis. `max > min` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub sections: u32,
    pub auto: bool,
}

impl AxisRange {
    pub fn new(min: f64, max: f64, sections: u32) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Err(ChartError::InvalidData(format!(
                "axis range must be finite with max > min (min={min}, max={max})"
            )));
        }
        Ok(Self {
            min,
            max,
            sections: coerce_sections(i64::from(sections)),
            auto: false,
        })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` inside the range, 0 at `min` and 1 at `max`.
    #[must_use]
    pub fn fraction(self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }

    /// Evenly spaced tick values from `min` to `max` inclusive.
    #[must_use]
    pub fn tick_values(self) -> Vec<f64> {
        let step = self.span() / f64::from(self.sections);
        (0..=self.sections)
            .map(|k| self.min + step * f64::from(k))
            .collect()
    }
}

/// Host-facing settings of one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSettings {
    pub min: f64,
    pub max: f64,
    pub sections: u32,
    pub format: NumberFormat,
    pub custom_labels: Vec<String>,
}

/// Tick mark with its pixel position along the axis and display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub position: f64,
    pub label: String,
}

/// Resolved ranges of both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    pub x: AxisRange,
    pub y: AxisRange,
}

impl AxisScale {
    #[must_use]
    pub fn range(&self, axis: AxisKind) -> AxisRange {
        match axis {
            AxisKind::X => self.x,
            AxisKind::Y => self.y,
        }
    }

    /// Range carrying data values for `style`.
    #[must_use]
    pub fn value_range(&self, style: ChartStyle) -> AxisRange {
        self.range(style.value_axis())
    }

    /// Range carrying category indices for `style`.
    #[must_use]
    pub fn category_range(&self, style: ChartStyle) -> AxisRange {
        match style.value_axis() {
            AxisKind::X => self.y,
            AxisKind::Y => self.x,
        }
    }
}

/// Non-positive section counts fall back to [`DEFAULT_SECTIONS`].
#[must_use]
pub fn coerce_sections(sections: i64) -> u32 {
    if sections <= 0 {
        DEFAULT_SECTIONS
    } else {
        u32::try_from(sections).unwrap_or(u32::MAX)
    }
}

/// Resolves both axis ranges for `style`.
///
/// Axes not covered by `auto` keep the user bounds untouched. Covered value
/// axes are rounded outwards to a round number; covered category axes span
/// the longest participating series.
#[must_use]
pub fn scale_axes(
    style: ChartStyle,
    participants: &[&Series],
    auto: AutoAdjust,
    x: &AxisSettings,
    y: &AxisSettings,
) -> AxisScale {
    let resolve = |axis: AxisKind, settings: &AxisSettings| -> AxisRange {
        let sections = coerce_sections(i64::from(settings.sections));
        let is_value_axis = axis == style.value_axis();
        if is_value_axis && style.stack_mode() == StackMode::FullStacked {
            return AxisRange {
                min: 0.0,
                max: 100.0,
                sections,
                auto: auto.covers(axis),
            };
        }
        if !auto.covers(axis) {
            return AxisRange {
                min: settings.min,
                max: settings.max,
                sections,
                auto: false,
            };
        }

        let (min, max) = if is_value_axis {
            auto_value_bounds(observed_extent(style, participants))
        } else {
            (0.0, category_count(participants).max(1) as f64)
        };
        AxisRange {
            min,
            max,
            sections,
            auto: true,
        }
    };

    AxisScale {
        x: resolve(AxisKind::X, x),
        y: resolve(AxisKind::Y, y),
    }
}

/// Number of categories: the longest participating series.
#[must_use]
pub fn category_count(participants: &[&Series]) -> usize {
    participants.iter().map(|series| series.len()).max().unwrap_or(0)
}

/// Rounds an observed `(min, max)` outwards. Zero is always inside the result.
#[must_use]
pub fn auto_value_bounds(observed: Option<(f64, f64)>) -> (f64, f64) {
    let (lo, hi) = observed.unwrap_or((0.0, 0.0));
    let max = if hi > 0.0 { nice_ceiling(hi) } else { 0.0 };
    let min = if lo < 0.0 { -nice_ceiling(-lo) } else { 0.0 };
    if max <= min { (min, min + 1.0) } else { (min, max) }
}

/// Observed data extent relevant to the value axis of `style`.
#[must_use]
pub fn observed_extent(style: ChartStyle, participants: &[&Series]) -> Option<(f64, f64)> {
    let mut samples: Vec<f64> = Vec::new();
    match (style.family(), style.stack_mode()) {
        (_, StackMode::Stacked) => {
            let count = category_count(participants);
            for index in 0..count {
                let mut running = 0.0;
                for series in participants {
                    running += series.plain_at(index);
                    samples.push(running);
                }
            }
        }
        (StyleFamily::Waterfall, _) => {
            if let Some(series) = participants.first() {
                let mut running = 0.0;
                samples.push(running);
                for value in series.values() {
                    running += value.plain_value().unwrap_or(0.0);
                    samples.push(running);
                }
            }
        }
        (StyleFamily::Stock, _) => {
            for series in participants {
                for value in series.values() {
                    let (low, high) = value.extent();
                    samples.push(low);
                    samples.push(high);
                }
            }
        }
        _ => {
            for series in participants {
                samples.extend(series.values().iter().filter_map(|value| value.plain_value().ok()));
            }
        }
    }

    let min = finite_min(samples.iter().copied())?;
    let max = finite_max(samples.iter().copied())?;
    Some((min, max))
}

/// Ticks with pixel positions for `axis` inside `viewport`.
///
/// X positions run left to right (mirrored for right-to-left flow); Y
/// positions are inverted so `range.min` sits at the bottom edge.
///
/// Ticks always span the full plot edge to edge. Under
/// [`ChartBoundary::WithOffset`] categories are centered in their slots, so
/// X ticks do not line up with category centers; use [`PlotMapping`] to
/// locate a category.
///
/// [`ChartBoundary::WithOffset`]: crate::core::ChartBoundary::WithOffset
/// [`PlotMapping`]: crate::core::geometry::PlotMapping
#[must_use]
pub fn axis_ticks(
    range: AxisRange,
    settings: &AxisSettings,
    axis: AxisKind,
    viewport: Viewport,
    flow: FlowDirection,
) -> Vec<AxisTick> {
    if !viewport.is_valid() {
        return Vec::new();
    }

    range
        .tick_values()
        .into_iter()
        .enumerate()
        .map(|(position_index, value)| {
            let fraction = range.fraction(value);
            let position = match (axis, flow) {
                (AxisKind::X, FlowDirection::LeftToRight) => fraction * viewport.width_px(),
                (AxisKind::X, FlowDirection::RightToLeft) => (1.0 - fraction) * viewport.width_px(),
                (AxisKind::Y, _) => viewport.height_px() - fraction * viewport.height_px(),
            };
            AxisTick {
                value,
                position,
                label: tick_label(value, position_index, settings),
            }
        })
        .collect()
}

/// Custom label at `position_index` when one exists, the formatted number
/// otherwise.
#[must_use]
pub fn tick_label(value: f64, position_index: usize, settings: &AxisSettings) -> String {
    settings
        .custom_labels
        .get(position_index)
        .cloned()
        .unwrap_or_else(|| settings.format.format(value))
}
