//! Legend entries and tooltip text.
//!
//! Legends list one entry per series, or one per value for pie styles, and
//! close with a fixed pair of role entries (rise/fall) that only waterfall and
//! stock styles show. Tooltips resolve a pixel position against a series' hit
//! regions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::format::NumberFormat;
use crate::core::geometry::{SeriesGeometry, participants};
use crate::core::palette::{ColorAllocator, ColorSlot};
use crate::core::series::Series;
use crate::core::style::{ChartStyle, StyleFamily};
use crate::core::types::PixelPoint;
use crate::core::value::{SeriesKind, ValueData};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Fixed role of the two trailing legend entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegendRole {
    Increase,
    Decrease,
}

/// What a legend entry stands for; activation reports this back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegendSource {
    Series { series_index: usize },
    Value {
        series_index: usize,
        value_index: usize,
    },
    Role(LegendRole),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub source: LegendSource,
    pub text: String,
    pub color: Color,
    pub visible: bool,
    /// Series (or pie value) visibility.
    pub checked: bool,
    /// Whether the host should offer a hide/show toggle.
    pub checkable: bool,
}

/// Texts of the two role entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendPair {
    pub increase: String,
    pub decrease: String,
}

impl LegendPair {
    #[must_use]
    pub fn new(increase: impl Into<String>, decrease: impl Into<String>) -> Self {
        Self {
            increase: increase.into(),
            decrease: decrease.into(),
        }
    }

    /// Builds a pair from a host-supplied label list. Lists shorter than two
    /// entries are rejected; extra entries are ignored.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> ChartResult<Self> {
        match labels {
            [increase, decrease, ..] => Ok(Self::new(increase.as_ref(), decrease.as_ref())),
            _ => Err(ChartError::InvalidConfig(format!(
                "legend label override needs at least 2 entries, got {}",
                labels.len()
            ))),
        }
    }

    #[must_use]
    pub fn text(&self, role: LegendRole) -> &str {
        match role {
            LegendRole::Increase => &self.increase,
            LegendRole::Decrease => &self.decrease,
        }
    }
}

/// Role entry texts for every style that shows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendLabels {
    pub waterfall: LegendPair,
    pub high_low_close: LegendPair,
    pub open_high_low_close: LegendPair,
}

impl Default for LegendLabels {
    fn default() -> Self {
        Self {
            waterfall: LegendPair::new("Increase", "Decrease"),
            high_low_close: LegendPair::new("Up", "Down"),
            open_high_low_close: LegendPair::new("Bullish", "Bearish"),
        }
    }
}

impl LegendLabels {
    /// Pair shown for `style`, if the style has role entries at all.
    #[must_use]
    pub fn pair_for(&self, style: ChartStyle) -> Option<&LegendPair> {
        match style {
            ChartStyle::Waterfall => Some(&self.waterfall),
            ChartStyle::HighLowClose => Some(&self.high_low_close),
            ChartStyle::OpenHighLowClose => Some(&self.open_high_low_close),
            _ => None,
        }
    }
}

/// Who decides whether legend entries offer a hide toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SeriesHidePolicy {
    /// Enabled for plain data outside waterfall/funnel styles when the host
    /// allows it or something is already hidden.
    #[default]
    Auto,
    /// Host-controlled; the flag is used as is.
    Manual(bool),
}

/// Effective hide flag for the current series set and style.
#[must_use]
pub fn series_hide_enabled(
    policy: SeriesHidePolicy,
    allow_series_hide: bool,
    style: ChartStyle,
    series: &[&Series],
) -> bool {
    match policy {
        SeriesHidePolicy::Manual(enabled) => enabled,
        SeriesHidePolicy::Auto => {
            let eligible = series.iter().all(|item| item.kind() == SeriesKind::Plain)
                && !matches!(style.family(), StyleFamily::Waterfall | StyleFamily::Funnel);
            let something_hidden = if style.family() == StyleFamily::Pie {
                participants(style, series.iter().copied())
                    .first()
                    .is_some_and(|item| item.has_hidden_values())
            } else {
                series.iter().any(|item| !item.is_visible())
            };
            eligible && (allow_series_hide || something_hidden)
        }
    }
}

/// Inputs of one legend composition pass.
#[derive(Debug, Clone, Copy)]
pub struct LegendInput<'a> {
    pub style: ChartStyle,
    /// Whole collection in index order, hidden series included.
    pub series: &'a [&'a Series],
    pub colors: &'a ColorAllocator,
    pub percent_format: &'a NumberFormat,
    pub labels: &'a LegendLabels,
    pub series_hide: bool,
}

#[must_use]
pub fn compose_legend(input: &LegendInput<'_>) -> Vec<LegendEntry> {
    let mut entries = if input.style.family() == StyleFamily::Pie {
        value_entries(input)
    } else {
        series_entries(input)
    };
    entries.extend(role_entries(input));
    entries
}

fn series_entries(input: &LegendInput<'_>) -> Vec<LegendEntry> {
    input
        .series
        .iter()
        .map(|series| LegendEntry {
            source: LegendSource::Series {
                series_index: series.index(),
            },
            text: series.name().to_owned(),
            color: slot_color(input.colors, series.main_slot()),
            visible: input.style.accepts(series.kind()),
            checked: series.is_visible(),
            checkable: input.series_hide,
        })
        .collect()
}

fn value_entries(input: &LegendInput<'_>) -> Vec<LegendEntry> {
    let Some(series) = participants(input.style, input.series.iter().copied())
        .into_iter()
        .next()
    else {
        return Vec::new();
    };

    series
        .values()
        .iter()
        .enumerate()
        .map(|(value_index, value)| {
            let text = if value.is_visible() {
                let share = series.pie_share(value_index).unwrap_or(0.0);
                input.percent_format.format(share)
            } else {
                value
                    .custom_value()
                    .map_or_else(|| series.name().to_owned(), str::to_owned)
            };
            LegendEntry {
                source: LegendSource::Value {
                    series_index: series.index(),
                    value_index,
                },
                text,
                color: input.colors.indexed(value_index),
                visible: true,
                checked: value.is_visible(),
                checkable: input.series_hide,
            }
        })
        .collect()
}

fn role_entries(input: &LegendInput<'_>) -> SmallVec<[LegendEntry; 2]> {
    let pair = input.labels.pair_for(input.style);
    let owner = participants(input.style, input.series.iter().copied())
        .into_iter()
        .next();
    let visible = pair.is_some() && owner.is_some();
    let fallback = LegendLabels::default().waterfall;
    let pair = pair.unwrap_or(&fallback);

    [
        (LegendRole::Increase, owner.and_then(|series| series.main_slot())),
        (
            LegendRole::Decrease,
            owner.and_then(|series| series.secondary_slot()),
        ),
    ]
    .into_iter()
    .map(|(role, slot)| LegendEntry {
        source: LegendSource::Role(role),
        text: pair.text(role).to_owned(),
        color: slot_color(input.colors, slot),
        visible,
        checked: true,
        checkable: false,
    })
    .collect()
}

fn slot_color(colors: &ColorAllocator, slot: Option<ColorSlot>) -> Color {
    slot.map_or(Color::rgb(0.0, 0.0, 0.0), |slot| colors.resolve(slot))
}

/// Formats used by tooltip text.
#[derive(Debug, Clone, Copy)]
pub struct TooltipFormat<'a> {
    pub value: &'a NumberFormat,
    /// When set, visible values get their share of the visible sum appended.
    pub percent: Option<&'a NumberFormat>,
}

/// Tooltip for one value: name and formatted value for plain data, a
/// multi-line breakdown for stock data, followed by the custom annotation.
#[must_use]
pub fn value_tooltip(series: &Series, value_index: usize, format: TooltipFormat<'_>) -> String {
    let Some(value) = series.value(value_index) else {
        return series.name().to_owned();
    };

    let mut text = match value.data() {
        ValueData::Plain { value: amount } => {
            let mut line = format!("{}: {}", series.name(), format.value.format(amount));
            let share = series.pie_share(value_index);
            if let (Some(percent), Some(share)) = (format.percent, share) {
                line.push_str(&format!(" ({})", percent.format(share)));
            }
            line
        }
        ValueData::HighLowClose { high, low, close } => format!(
            "{}\nHigh: {}\nLow: {}\nClose: {}",
            series.name(),
            format.value.format(high),
            format.value.format(low),
            format.value.format(close)
        ),
        ValueData::OpenHighLowClose {
            open,
            high,
            low,
            close,
        } => format!(
            "{}\nOpen: {}\nHigh: {}\nLow: {}\nClose: {}",
            series.name(),
            format.value.format(open),
            format.value.format(high),
            format.value.format(low),
            format.value.format(close)
        ),
    };
    if let Some(custom) = value.custom_value() {
        text.push('\n');
        text.push_str(custom);
    }
    text
}

/// Tooltip of the first hit region containing `point`, or the series name
/// when nothing matches.
#[must_use]
pub fn series_tooltip(
    series: &Series,
    geometry: &SeriesGeometry,
    point: PixelPoint,
    format: TooltipFormat<'_>,
) -> String {
    geometry.hit_test(point).map_or_else(
        || series.name().to_owned(),
        |region| value_tooltip(series, region.value_index, format),
    )
}

#[cfg(test)]
mod tests {
    use super::{LegendPair, LegendRole};

    #[test]
    fn pair_rejects_single_label() {
        assert!(LegendPair::from_labels(&["only"]).is_err());
        let pair = LegendPair::from_labels(&["Gain", "Loss", "ignored"]).expect("two labels");
        assert_eq!(pair.text(LegendRole::Decrease), "Loss");
    }
}
