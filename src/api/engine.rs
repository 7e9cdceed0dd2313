use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::axis::{axis_ticks, scale_axes};
use crate::core::geometry::{GeometryContext, build_series_geometry, participants};
use crate::core::legend::{
    LegendInput, TooltipFormat, compose_legend, series_hide_enabled, series_tooltip,
    value_tooltip,
};
use crate::core::{
    AxisKind, ChartStyle, ColorAllocator, ColorSlot, LegendEntry, NumberFormat, PaletteConfig,
    PixelPoint, Series, SeriesId, StyleFamily,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, SeriesFrame};

use super::{ChartConfig, ChartEvent, ChartEventListener, InvalidationTopic, InvalidationTopics};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the ordered series collection, the palette allocator
/// and the configuration. Every mutation only marks invalidation topics;
/// [`ChartEngine::layout`] recomputes the frame at most once per batch.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) series: IndexMap<SeriesId, Series>,
    pub(super) next_series_id: u64,
    pub(super) colors: ColorAllocator,
    pub(super) pending: InvalidationTopics,
    pub(super) frame: Option<RenderFrame>,
    pub(super) listeners: Vec<Box<dyn ChartEventListener>>,
    pub(super) recompute_count: u64,
}

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine with the default palettes.
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        Self::with_palette(renderer, config, PaletteConfig::default())
    }

    /// Creates an engine with explicit palettes.
    pub fn with_palette(
        renderer: R,
        config: ChartConfig,
        palette: PaletteConfig,
    ) -> ChartResult<Self> {
        let palette = PaletteConfig::new(palette.primary, palette.secondary)?;
        Ok(Self {
            renderer,
            config: config.sanitized(),
            series: IndexMap::new(),
            next_series_id: 0,
            colors: ColorAllocator::new(palette),
            pending: InvalidationTopics::all(),
            frame: None,
            listeners: Vec::new(),
            recompute_count: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Replaces the whole configuration after coercing out-of-range values.
    pub fn set_config(&mut self, config: ChartConfig) {
        let viewport_changed = config.viewport != self.config.viewport;
        self.config = config.sanitized();
        debug!(style = ?self.config.style, "chart config replaced");
        self.on_config_changed();
        if viewport_changed {
            self.invalidate_topic(InvalidationTopic::Viewport);
        }
    }

    pub fn set_style(&mut self, style: ChartStyle) {
        if self.config.style == style {
            return;
        }
        debug!(from = ?self.config.style, to = ?style, "chart style changed");
        self.config.style = style;
        self.invalidate(
            InvalidationTopics::from_topic(InvalidationTopic::Style)
                .with_topic(InvalidationTopic::Axis)
                .with_topic(InvalidationTopic::Legend),
        );
    }

    /// Overrides the role legend texts of `style`. Lists with fewer than two
    /// entries are rejected and leave the configuration untouched.
    pub fn set_legend_labels<S: AsRef<str>>(
        &mut self,
        style: ChartStyle,
        labels: &[S],
    ) -> ChartResult<()> {
        self.config.set_legend_labels(style, labels)?;
        self.invalidate_topic(InvalidationTopic::Legend);
        Ok(())
    }

    #[must_use]
    pub fn colors(&self) -> &ColorAllocator {
        &self.colors
    }

    /// Number of layout passes performed so far.
    #[must_use]
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Resolved color of a series slot; unassigned slots resolve to black.
    #[must_use]
    pub fn resolve_color(&self, slot: Option<ColorSlot>) -> Color {
        slot.map_or(Color::rgb(0.0, 0.0, 0.0), |slot| self.colors.resolve(slot))
    }

    /// Whether legend entries currently offer a hide toggle.
    #[must_use]
    pub fn series_hide_enabled(&self) -> bool {
        let ordered: Vec<&Series> = self.series.values().collect();
        series_hide_enabled(
            self.config.series_hide,
            self.config.allow_series_hide,
            self.config.style,
            &ordered,
        )
    }

    /// Returns the current frame, recomputing it first when anything was
    /// invalidated since the previous pass.
    pub fn layout(&mut self) -> &RenderFrame {
        let frame = match self.frame.take() {
            Some(frame) if self.pending.is_none() => frame,
            _ => self.recompute(),
        };
        self.frame.insert(frame)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        self.layout();
        let Some(frame) = self.frame.as_ref() else {
            return Ok(());
        };
        self.renderer.render(frame)
    }

    /// Legend entries of the current frame.
    pub fn legend(&mut self) -> Vec<LegendEntry> {
        self.layout().legend.clone()
    }

    /// Tooltip of the top-most visible series under `(x, y)`.
    ///
    /// Series drawn later sit on top, so they are scanned first. Returns
    /// `None` when no hit region contains the point.
    pub fn tooltip_at(&mut self, x: f64, y: f64) -> Option<String> {
        let (series_index, value_index) = self.hit_at(x, y)?;
        let series = self.series.get_index(series_index).map(|(_, series)| series)?;
        let value_format = self.config.value_format();
        let percent_format = self.config.percent_format();
        Some(value_tooltip(
            series,
            value_index,
            self.tooltip_format(&value_format, &percent_format),
        ))
    }

    /// Tooltip for one series: the first of its values under `(x, y)`, or
    /// just the series name.
    pub fn series_tooltip(&mut self, id: SeriesId, x: f64, y: f64) -> ChartResult<String> {
        let index = self
            .series
            .get_index_of(&id)
            .ok_or(ChartError::SeriesNotFound(id.raw()))?;
        let geometry = self
            .layout()
            .series_frame(index)
            .map(|frame| frame.geometry.clone())
            .unwrap_or_default();
        let series = &self.series[index];
        let value_format = self.config.value_format();
        let percent_format = self.config.percent_format();
        Ok(series_tooltip(
            series,
            &geometry,
            PixelPoint::new(x, y),
            self.tooltip_format(&value_format, &percent_format),
        ))
    }

    /// Point-activation gesture at `(x, y)`. Emits
    /// [`ChartEvent::PointActivated`] for the top-most hit and returns
    /// `(series_index, value_index)`.
    pub fn activate_point(&mut self, x: f64, y: f64) -> Option<(usize, usize)> {
        let (series_index, value_index) = self.hit_at(x, y)?;
        let series = self.series.get_index(series_index).map(|(id, _)| *id)?;
        debug!(series_index, value_index, "point activated");
        self.emit_event(ChartEvent::PointActivated {
            series,
            series_index,
            value_index,
        });
        Some((series_index, value_index))
    }

    /// Legend-activation gesture on entry `entry_index` of the current legend.
    pub fn activate_legend(&mut self, entry_index: usize) -> ChartResult<()> {
        let legend = &self.layout().legend;
        let len = legend.len();
        let source = legend
            .get(entry_index)
            .map(|entry| entry.source)
            .ok_or(ChartError::IndexOutOfRange {
                index: entry_index,
                len,
            })?;
        debug!(entry_index, ?source, "legend activated");
        self.emit_event(ChartEvent::LegendActivated {
            entry_index,
            source,
        });
        Ok(())
    }

    fn hit_at(&mut self, x: f64, y: f64) -> Option<(usize, usize)> {
        let point = PixelPoint::new(x, y);
        self.layout().series.iter().rev().find_map(|frame| {
            frame
                .geometry
                .hit_test(point)
                .map(|region| (frame.series_index, region.value_index))
        })
    }

    fn tooltip_format<'a>(
        &self,
        value_format: &'a NumberFormat,
        percent_format: &'a NumberFormat,
    ) -> TooltipFormat<'a> {
        TooltipFormat {
            value: value_format,
            percent: (self.config.style.family() == StyleFamily::Pie).then_some(percent_format),
        }
    }

    fn recompute(&mut self) -> RenderFrame {
        let topics = std::mem::take(&mut self.pending);
        let frame = self.compute_frame();
        self.recompute_count += 1;
        trace!(
            pass = self.recompute_count,
            ?topics,
            series = frame.series.len(),
            fragments = frame.fragment_count(),
            "layout pass"
        );
        self.emit_event(ChartEvent::Recomputed {
            pass: self.recompute_count,
            topics,
        });
        frame
    }

    /// Pure function of the current series set and configuration.
    fn compute_frame(&self) -> RenderFrame {
        let config = &self.config;
        let style = config.style;
        let ordered: Vec<&Series> = self.series.values().collect();
        let drawn = participants(style, ordered.iter().copied());

        let x_settings = config.x_axis.settings();
        let y_settings = config.y_axis.settings();
        let scale = scale_axes(style, &drawn, config.auto_adjust, &x_settings, &y_settings);
        let context = GeometryContext {
            style,
            participants: &drawn,
            viewport: config.viewport,
            scale,
            options: config.geometry_options(),
        };

        let mut frame = RenderFrame::new(config.viewport, style);
        frame.opacity = config.opacity;
        frame.value_palette = self.colors.config().primary.clone();
        frame.series = drawn
            .iter()
            .enumerate()
            .map(|(position, series)| SeriesFrame {
                series_index: series.index(),
                name: series.name().to_owned(),
                main_color: self.resolve_color(series.main_slot()),
                secondary_color: self.resolve_color(series.secondary_slot()),
                stroke_width: config.line_thickness,
                geometry: build_series_geometry(&context, position),
            })
            .collect();

        if style.has_axes() {
            let (viewport, flow) = (config.viewport, config.flow);
            frame.x_ticks = axis_ticks(scale.x, &x_settings, AxisKind::X, viewport, flow);
            frame.y_ticks = axis_ticks(scale.y, &y_settings, AxisKind::Y, viewport, flow);
        }

        let percent_format = config.percent_format();
        frame.legend = compose_legend(&LegendInput {
            style,
            series: &ordered,
            colors: &self.colors,
            percent_format: &percent_format,
            labels: &config.legend_labels,
            series_hide: series_hide_enabled(
                config.series_hide,
                config.allow_series_hide,
                style,
                &ordered,
            ),
        });
        frame
    }
}
