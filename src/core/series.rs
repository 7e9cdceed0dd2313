use serde::{Deserialize, Serialize};

use crate::core::palette::ColorSlot;
use crate::core::primitives::{finite_max, finite_min};
use crate::core::value::{ChartValue, SeriesKind};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Stable handle of a series, independent from its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesId(u64);

impl SeriesId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A named, ordered collection of values rendered under one visual identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    name: String,
    kind: SeriesKind,
    values: Vec<ChartValue>,
    #[serde(default = "default_visible")]
    visible: bool,
    #[serde(default)]
    index: usize,
    #[serde(default)]
    main_color: Option<ColorSlot>,
    #[serde(default)]
    secondary_color: Option<ColorSlot>,
}

fn default_visible() -> bool {
    true
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: SeriesKind) -> Self {
        Self {
            name: name.into(),
            kind,
            values: Vec::new(),
            visible: true,
            index: 0,
            main_color: None,
            secondary_color: None,
        }
    }

    /// Convenience constructor for a plain series.
    #[must_use]
    pub fn plain(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        let mut series = Self::new(name, SeriesKind::Plain);
        series.values = values.into_iter().map(ChartValue::plain).collect();
        series
    }

    /// Builds a series from values that must all match `kind`.
    pub fn with_values(
        name: impl Into<String>,
        kind: SeriesKind,
        values: Vec<ChartValue>,
    ) -> ChartResult<Self> {
        let mut series = Self::new(name, kind);
        for value in values {
            series.push(value)?;
        }
        Ok(series)
    }

    #[must_use]
    pub fn with_main_color(mut self, color: Color) -> Self {
        self.main_color = Some(ColorSlot::Fixed(color));
        self
    }

    #[must_use]
    pub fn with_secondary_color(mut self, color: Color) -> Self {
        self.secondary_color = Some(ColorSlot::Fixed(color));
        self
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn push(&mut self, value: ChartValue) -> ChartResult<()> {
        if value.kind() != self.kind {
            return Err(ChartError::InvalidKind {
                expected: self.kind.name(),
                found: value.kind().name(),
            });
        }
        self.values.push(value);
        Ok(())
    }

    pub fn set_value(&mut self, value_index: usize, value: ChartValue) -> ChartResult<()> {
        if value.kind() != self.kind {
            return Err(ChartError::InvalidKind {
                expected: self.kind.name(),
                found: value.kind().name(),
            });
        }
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(value_index)
            .ok_or(ChartError::IndexOutOfRange {
                index: value_index,
                len,
            })?;
        *slot = value;
        Ok(())
    }

    pub fn remove_value(&mut self, value_index: usize) -> ChartResult<ChartValue> {
        if value_index >= self.values.len() {
            return Err(ChartError::IndexOutOfRange {
                index: value_index,
                len: self.values.len(),
            });
        }
        Ok(self.values.remove(value_index))
    }

    pub fn clear_values(&mut self) {
        self.values.clear();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Toggles one value's visibility. Returns whether anything changed.
    pub fn set_value_visible(&mut self, value_index: usize, visible: bool) -> ChartResult<bool> {
        let len = self.values.len();
        self.values
            .get_mut(value_index)
            .map(|value| value.set_visible(visible))
            .ok_or(ChartError::IndexOutOfRange {
                index: value_index,
                len,
            })
    }

    pub(crate) fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub(crate) fn set_main_slot(&mut self, slot: Option<ColorSlot>) -> Option<ColorSlot> {
        std::mem::replace(&mut self.main_color, slot)
    }

    pub(crate) fn set_secondary_slot(&mut self, slot: Option<ColorSlot>) -> Option<ColorSlot> {
        std::mem::replace(&mut self.secondary_color, slot)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        self.kind
    }

    #[must_use]
    pub fn values(&self) -> &[ChartValue] {
        &self.values
    }

    #[must_use]
    pub fn value(&self, value_index: usize) -> Option<&ChartValue> {
        self.values.get(value_index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Dense position of this series in the engine's collection.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn main_slot(&self) -> Option<ColorSlot> {
        self.main_color
    }

    #[must_use]
    pub fn secondary_slot(&self) -> Option<ColorSlot> {
        self.secondary_color
    }

    /// Plain value at `value_index`, or `0.0` when the index is past the end
    /// or the series is not plain.
    #[must_use]
    pub fn plain_at(&self, value_index: usize) -> f64 {
        self.values
            .get(value_index)
            .and_then(|value| value.plain_value().ok())
            .unwrap_or(0.0)
    }

    /// Sum of every value's primary component.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.values.iter().map(ChartValue::primary_value).sum()
    }

    /// Sum over visible values only.
    #[must_use]
    pub fn visible_sum(&self) -> f64 {
        self.values
            .iter()
            .filter(|value| value.is_visible())
            .map(ChartValue::primary_value)
            .sum()
    }

    /// Pie denominator: visible plain values with negatives counted as zero.
    #[must_use]
    pub fn pie_total(&self) -> f64 {
        self.values
            .iter()
            .filter(|value| value.is_visible())
            .map(pie_amount)
            .sum()
    }

    /// Fraction of the pie taken by the value at `value_index`. `None` when
    /// the value is missing or hidden, or when nothing positive is visible.
    #[must_use]
    pub fn pie_share(&self, value_index: usize) -> Option<f64> {
        let value = self.values.get(value_index).filter(|value| value.is_visible())?;
        let total = self.pie_total();
        (total > 0.0).then(|| pie_amount(value) / total)
    }

    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        finite_max(self.values.iter().map(|value| value.extent().1))
    }

    #[must_use]
    pub fn min_value(&self) -> Option<f64> {
        finite_min(self.values.iter().map(|value| value.extent().0))
    }

    #[must_use]
    pub fn has_hidden_values(&self) -> bool {
        self.values.iter().any(|value| !value.is_visible())
    }
}

/// Sector amount of one pie value; negative and non-plain values draw nothing.
#[must_use]
pub fn pie_amount(value: &ChartValue) -> f64 {
    value.plain_value().map_or(0.0, |amount| amount.max(0.0))
}

/// Sum of each plain series' value at every index, treating missing trailing
/// values as zero.
#[must_use]
pub fn stacked_totals<'a>(series: impl IntoIterator<Item = &'a Series>) -> Vec<f64> {
    let mut totals: Vec<f64> = Vec::new();
    for item in series {
        if totals.len() < item.len() {
            totals.resize(item.len(), 0.0);
        }
        for (index, total) in totals.iter_mut().enumerate().take(item.len()) {
            *total += item.plain_at(index);
        }
    }
    totals
}
