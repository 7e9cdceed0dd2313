mod engine;
mod engine_config;
mod events;
mod invalidation;
mod series_controller;
mod validation;

pub use engine::ChartEngine;
pub use engine_config::{
    AxisConfig, ChartConfig, DEFAULT_AXIS_MAX, DEFAULT_AXIS_MIN, DEFAULT_LINE_THICKNESS,
    DEFAULT_MARKER_SIZE, DEFAULT_OPACITY, DEFAULT_PIE_FORMAT,
};
pub use events::{ChartEvent, ChartEventListener};
pub use invalidation::{InvalidationTopic, InvalidationTopics};
