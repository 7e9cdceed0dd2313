mod frame;
mod null_renderer;
mod primitives;

pub use frame::{RenderFrame, SeriesFrame};
pub use null_renderer::NullRenderer;
pub use primitives::Color;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from series bookkeeping and layout math.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
