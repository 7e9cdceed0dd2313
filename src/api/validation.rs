use tracing::warn;

use crate::core::axis::DEFAULT_SECTIONS;
use crate::core::format::{DEFAULT_FORMAT, NumberFormat};

use super::engine_config::{
    AxisConfig, ChartConfig, DEFAULT_AXIS_MAX, DEFAULT_AXIS_MIN, DEFAULT_LINE_THICKNESS,
    DEFAULT_MARKER_SIZE, DEFAULT_OPACITY, DEFAULT_PIE_FORMAT,
};

/// Replaces out-of-range settings with defaults. Display must never fail, so
/// nothing here is an error; every substitution is logged.
pub(super) fn sanitize_config(mut config: ChartConfig) -> ChartConfig {
    sanitize_axis("x", &mut config.x_axis);
    sanitize_axis("y", &mut config.y_axis);

    if NumberFormat::parse(&config.pie_format).is_err() {
        warn!(format = %config.pie_format, "pie format is empty or malformed; using default");
        config.pie_format = DEFAULT_PIE_FORMAT.to_owned();
    }
    if !config.line_thickness.is_finite() || config.line_thickness <= 0.0 {
        warn!(
            line_thickness = config.line_thickness,
            "line thickness must be > 0; using default"
        );
        config.line_thickness = DEFAULT_LINE_THICKNESS;
    }
    if !config.marker_size.is_finite() || config.marker_size <= 0.0 {
        warn!(
            marker_size = config.marker_size,
            "marker size must be > 0; using default"
        );
        config.marker_size = DEFAULT_MARKER_SIZE;
    }
    if !config.opacity.is_finite() || !(0.0..=1.0).contains(&config.opacity) {
        warn!(
            opacity = config.opacity,
            "opacity must be in [0, 1]; using default"
        );
        config.opacity = DEFAULT_OPACITY;
    }
    config
}

fn sanitize_axis(axis: &'static str, config: &mut AxisConfig) {
    if config.sections <= 0 {
        warn!(axis, sections = config.sections, "section count must be > 0; using default");
        config.sections = i64::from(DEFAULT_SECTIONS);
    }
    if NumberFormat::parse(&config.format).is_err() {
        warn!(axis, format = %config.format, "axis format is empty or malformed; using default");
        config.format = DEFAULT_FORMAT.to_owned();
    }

    let bounds_valid = config.min.is_finite()
        && config.max.is_finite()
        && config.max >= 0.0
        && config.max > config.min;
    if !bounds_valid {
        warn!(
            axis,
            min = config.min,
            max = config.max,
            "axis bounds need a non-negative finite max above min; using defaults"
        );
        config.min = DEFAULT_AXIS_MIN;
        config.max = DEFAULT_AXIS_MAX;
    }
}
