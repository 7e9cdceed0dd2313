//! chart-geometry: headless series-to-geometry and layout engine.
//!
//! Given an ordered set of data series, a chart style, axis settings and a
//! container size, the engine computes pixel-space geometry, axis ticks,
//! legend entries and tooltip text, and hands the result to a [`Renderer`].
//! Drawing, input handling and data binding belong to the host.
//!
//! [`Renderer`]: render::Renderer

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine};
pub use error::{ChartError, ChartResult};
