use serde::{Deserialize, Serialize};

use crate::core::axis::{AxisSettings, coerce_sections};
use crate::core::format::{DEFAULT_FORMAT, NumberFormat};
use crate::core::geometry::GeometryOptions;
use crate::core::{
    AutoAdjust, AxisKind, ChartBoundary, ChartStyle, FlowDirection, LegendLabels, LegendPair,
    MarkerShape, SeriesHidePolicy, Viewport,
};
use crate::error::{ChartError, ChartResult};

use super::validation::sanitize_config;

pub const DEFAULT_AXIS_MIN: f64 = 0.0;
pub const DEFAULT_AXIS_MAX: f64 = 100.0;
pub const DEFAULT_LINE_THICKNESS: f64 = 2.0;
pub const DEFAULT_MARKER_SIZE: f64 = 8.0;
pub const DEFAULT_OPACITY: f64 = 1.0;
pub const DEFAULT_PIE_FORMAT: &str = "0%";

/// Host-facing settings of one axis, before coercion.
///
/// `sections` is signed so that host input such as `-1` can be coerced
/// instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    #[serde(default = "default_axis_min")]
    pub min: f64,
    #[serde(default = "default_axis_max")]
    pub max: f64,
    #[serde(default = "default_sections")]
    pub sections: i64,
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub custom_labels: Vec<String>,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            min: default_axis_min(),
            max: default_axis_max(),
            sections: default_sections(),
            format: default_format(),
            custom_labels: Vec::new(),
        }
    }
}

impl AxisConfig {
    #[must_use]
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    #[must_use]
    pub fn with_sections(mut self, sections: i64) -> Self {
        self.sections = sections;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    #[must_use]
    pub fn with_custom_labels(mut self, labels: Vec<String>) -> Self {
        self.custom_labels = labels;
        self
    }

    /// Resolved settings consumed by the axis engine.
    #[must_use]
    pub fn settings(&self) -> AxisSettings {
        AxisSettings {
            min: self.min,
            max: self.max,
            sections: coerce_sections(self.sections),
            format: NumberFormat::parse_or_default(&self.format),
            custom_labels: self.custom_labels.clone(),
        }
    }
}

/// Public engine configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Out-of-range numbers are coerced
/// by [`ChartConfig::sanitized`]; the engine applies it on every update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub style: ChartStyle,
    #[serde(default)]
    pub auto_adjust: AutoAdjust,
    #[serde(default)]
    pub boundary: ChartBoundary,
    #[serde(default)]
    pub flow: FlowDirection,
    #[serde(default)]
    pub x_axis: AxisConfig,
    #[serde(default)]
    pub y_axis: AxisConfig,
    #[serde(default = "default_pie_format")]
    pub pie_format: String,
    #[serde(default)]
    pub legend_labels: LegendLabels,
    #[serde(default)]
    pub marker_shape: MarkerShape,
    #[serde(default = "default_marker_size")]
    pub marker_size: f64,
    #[serde(default = "default_line_thickness")]
    pub line_thickness: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub series_hide: SeriesHidePolicy,
    #[serde(default)]
    pub allow_series_hide: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            style: ChartStyle::default(),
            auto_adjust: AutoAdjust::default(),
            boundary: ChartBoundary::default(),
            flow: FlowDirection::default(),
            x_axis: AxisConfig::default(),
            y_axis: AxisConfig::default(),
            pie_format: default_pie_format(),
            legend_labels: LegendLabels::default(),
            marker_shape: MarkerShape::default(),
            marker_size: default_marker_size(),
            line_thickness: default_line_thickness(),
            opacity: default_opacity(),
            series_hide: SeriesHidePolicy::default(),
            allow_series_hide: false,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_auto_adjust(mut self, auto_adjust: AutoAdjust) -> Self {
        self.auto_adjust = auto_adjust;
        self
    }

    #[must_use]
    pub fn with_boundary(mut self, boundary: ChartBoundary) -> Self {
        self.boundary = boundary;
        self
    }

    #[must_use]
    pub fn with_flow(mut self, flow: FlowDirection) -> Self {
        self.flow = flow;
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, axis: AxisConfig) -> Self {
        self.x_axis = axis;
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: AxisConfig) -> Self {
        self.y_axis = axis;
        self
    }

    #[must_use]
    pub fn with_pie_format(mut self, format: impl Into<String>) -> Self {
        self.pie_format = format.into();
        self
    }

    #[must_use]
    pub fn with_marker(mut self, shape: MarkerShape, size: f64) -> Self {
        self.marker_shape = shape;
        self.marker_size = size;
        self
    }

    #[must_use]
    pub fn with_line_thickness(mut self, thickness: f64) -> Self {
        self.line_thickness = thickness;
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_series_hide(mut self, policy: SeriesHidePolicy, allow: bool) -> Self {
        self.series_hide = policy;
        self.allow_series_hide = allow;
        self
    }

    /// Replaces the role legend texts of `style` from a host label list.
    ///
    /// Fails for lists with fewer than two entries and for styles without
    /// role legends.
    pub fn with_legend_labels<S: AsRef<str>>(
        mut self,
        style: ChartStyle,
        labels: &[S],
    ) -> ChartResult<Self> {
        self.set_legend_labels(style, labels)?;
        Ok(self)
    }

    pub fn set_legend_labels<S: AsRef<str>>(
        &mut self,
        style: ChartStyle,
        labels: &[S],
    ) -> ChartResult<()> {
        let pair = LegendPair::from_labels(labels)?;
        let slot = match style {
            ChartStyle::Waterfall => &mut self.legend_labels.waterfall,
            ChartStyle::HighLowClose => &mut self.legend_labels.high_low_close,
            ChartStyle::OpenHighLowClose => &mut self.legend_labels.open_high_low_close,
            other => {
                return Err(ChartError::InvalidConfig(format!(
                    "style {other:?} has no role legend"
                )));
            }
        };
        *slot = pair;
        Ok(())
    }

    #[must_use]
    pub fn axis(&self, axis: AxisKind) -> &AxisConfig {
        match axis {
            AxisKind::X => &self.x_axis,
            AxisKind::Y => &self.y_axis,
        }
    }

    /// Format of the axis carrying values for the current style.
    #[must_use]
    pub fn value_format(&self) -> NumberFormat {
        NumberFormat::parse_or_default(&self.axis(self.style.value_axis()).format)
    }

    #[must_use]
    pub fn percent_format(&self) -> NumberFormat {
        NumberFormat::parse_or_default(&self.pie_format)
    }

    #[must_use]
    pub fn geometry_options(&self) -> GeometryOptions {
        GeometryOptions {
            boundary: self.boundary,
            flow: self.flow,
            marker_shape: self.marker_shape,
            marker_size: self.marker_size,
            line_thickness: self.line_thickness,
        }
    }

    /// Copy with every out-of-range setting replaced by its default.
    #[must_use]
    pub fn sanitized(self) -> Self {
        sanitize_config(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_axis_min() -> f64 {
    DEFAULT_AXIS_MIN
}

fn default_axis_max() -> f64 {
    DEFAULT_AXIS_MAX
}

fn default_sections() -> i64 {
    i64::from(crate::core::axis::DEFAULT_SECTIONS)
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_owned()
}

fn default_pie_format() -> String {
    DEFAULT_PIE_FORMAT.to_owned()
}

fn default_marker_size() -> f64 {
    DEFAULT_MARKER_SIZE
}

fn default_line_thickness() -> f64 {
    DEFAULT_LINE_THICKNESS
}

fn default_opacity() -> f64 {
    DEFAULT_OPACITY
}
