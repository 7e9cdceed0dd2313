use serde::{Deserialize, Serialize};

use crate::core::{AxisTick, BrushRole, ChartStyle, LegendEntry, SeriesGeometry, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Geometry of one series together with its resolved brushes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesFrame {
    pub series_index: usize,
    pub name: String,
    pub main_color: Color,
    pub secondary_color: Color,
    pub stroke_width: f64,
    pub geometry: SeriesGeometry,
}

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub style: ChartStyle,
    pub series: Vec<SeriesFrame>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub legend: Vec<LegendEntry>,
    /// Colors behind [`BrushRole::Indexed`], cycled by value index.
    pub value_palette: Vec<Color>,
    /// Fill opacity applied to every brush.
    pub opacity: f64,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, style: ChartStyle) -> Self {
        Self {
            viewport,
            style,
            series: Vec::new(),
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            legend: Vec::new(),
            value_palette: Vec::new(),
            opacity: 1.0,
        }
    }

    /// Color a backend should use for `role` within `series`.
    #[must_use]
    pub fn brush(&self, series: &SeriesFrame, role: BrushRole) -> Color {
        let color = match role {
            BrushRole::Main => series.main_color,
            BrushRole::Secondary => series.secondary_color,
            BrushRole::Indexed(index) if !self.value_palette.is_empty() => {
                self.value_palette[index % self.value_palette.len()]
            }
            BrushRole::Indexed(_) => series.main_color,
        };
        color.with_opacity(self.opacity)
    }

    #[must_use]
    pub fn series_frame(&self, series_index: usize) -> Option<&SeriesFrame> {
        self.series
            .iter()
            .find(|frame| frame.series_index == series_index)
    }

    #[must_use]
    pub fn fragment_count(&self) -> usize {
        self.series
            .iter()
            .map(|frame| frame.geometry.fragments.len())
            .sum()
    }

    /// A zero-size viewport is accepted as long as nothing is drawn into it.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() && !self.is_empty() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ChartError::InvalidData(format!(
                "frame opacity must be in [0, 1], got {}",
                self.opacity
            )));
        }

        for frame in &self.series {
            frame.main_color.validate()?;
            frame.secondary_color.validate()?;
            if !frame.stroke_width.is_finite() || frame.stroke_width <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "series {} stroke width must be finite and > 0",
                    frame.series_index
                )));
            }
            if let Some(fragment) = frame
                .geometry
                .fragments
                .iter()
                .find(|fragment| !fragment.shape.is_finite())
            {
                return Err(ChartError::InvalidData(format!(
                    "series {} produced non-finite geometry for value {:?}",
                    frame.series_index, fragment.value_index
                )));
            }
        }
        for tick in self.x_ticks.iter().chain(self.y_ticks.iter()) {
            if !tick.position.is_finite() || !tick.value.is_finite() {
                return Err(ChartError::InvalidData(
                    "axis tick must be finite".to_owned(),
                ));
            }
        }
        for color in &self.value_palette {
            color.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|frame| frame.geometry.is_empty())
            && self.x_ticks.is_empty()
            && self.y_ticks.is_empty()
    }
}
