use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// Shape of the data carried by a value and by the series that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SeriesKind {
    #[default]
    Plain,
    HighLowClose,
    OpenHighLowClose,
}

impl SeriesKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::HighLowClose => "high-low-close",
            Self::OpenHighLowClose => "open-high-low-close",
        }
    }

    #[must_use]
    pub const fn is_stock(self) -> bool {
        matches!(self, Self::HighLowClose | Self::OpenHighLowClose)
    }
}

/// Numeric payload of one data point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ValueData {
    Plain {
        value: f64,
    },
    HighLowClose {
        high: f64,
        low: f64,
        close: f64,
    },
    OpenHighLowClose {
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    },
}

impl ValueData {
    #[must_use]
    pub const fn kind(self) -> SeriesKind {
        match self {
            Self::Plain { .. } => SeriesKind::Plain,
            Self::HighLowClose { .. } => SeriesKind::HighLowClose,
            Self::OpenHighLowClose { .. } => SeriesKind::OpenHighLowClose,
        }
    }
}

/// One data point of a series.
///
/// The ordering `low <= close <= high` is expected for stock values but not
/// enforced; builders render whatever the data source supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartValue {
    data: ValueData,
    #[serde(default = "default_visible")]
    visible: bool,
    #[serde(default)]
    custom_value: Option<String>,
}

fn default_visible() -> bool {
    true
}

impl ChartValue {
    #[must_use]
    pub fn new(data: ValueData) -> Self {
        Self {
            data,
            visible: true,
            custom_value: None,
        }
    }

    #[must_use]
    pub fn plain(value: f64) -> Self {
        Self::new(ValueData::Plain { value })
    }

    #[must_use]
    pub fn high_low_close(high: f64, low: f64, close: f64) -> Self {
        Self::new(ValueData::HighLowClose { high, low, close })
    }

    #[must_use]
    pub fn open_high_low_close(open: f64, high: f64, low: f64, close: f64) -> Self {
        Self::new(ValueData::OpenHighLowClose {
            open,
            high,
            low,
            close,
        })
    }

    pub fn plain_decimal(value: Decimal) -> ChartResult<Self> {
        Ok(Self::plain(decimal_to_f64(value, "value")?))
    }

    pub fn high_low_close_decimal(high: Decimal, low: Decimal, close: Decimal) -> ChartResult<Self> {
        Ok(Self::high_low_close(
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        ))
    }

    pub fn open_high_low_close_decimal(
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Ok(Self::open_high_low_close(
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        ))
    }

    #[must_use]
    pub fn with_custom_value(mut self, text: impl Into<String>) -> Self {
        self.custom_value = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn data(&self) -> ValueData {
        self.data
    }

    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        self.data.kind()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Only reachable through the owning series so the change is recorded.
    pub(crate) fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }

    #[must_use]
    pub fn custom_value(&self) -> Option<&str> {
        self.custom_value.as_deref()
    }

    pub fn plain_value(&self) -> ChartResult<f64> {
        match self.data {
            ValueData::Plain { value } => Ok(value),
            other => Err(kind_error(SeriesKind::Plain, other)),
        }
    }

    pub fn high_value(&self) -> ChartResult<f64> {
        match self.data {
            ValueData::HighLowClose { high, .. } | ValueData::OpenHighLowClose { high, .. } => {
                Ok(high)
            }
            other => Err(kind_error(SeriesKind::HighLowClose, other)),
        }
    }

    pub fn low_value(&self) -> ChartResult<f64> {
        match self.data {
            ValueData::HighLowClose { low, .. } | ValueData::OpenHighLowClose { low, .. } => {
                Ok(low)
            }
            other => Err(kind_error(SeriesKind::HighLowClose, other)),
        }
    }

    pub fn close_value(&self) -> ChartResult<f64> {
        match self.data {
            ValueData::HighLowClose { close, .. } | ValueData::OpenHighLowClose { close, .. } => {
                Ok(close)
            }
            other => Err(kind_error(SeriesKind::HighLowClose, other)),
        }
    }

    pub fn open_value(&self) -> ChartResult<f64> {
        match self.data {
            ValueData::OpenHighLowClose { open, .. } => Ok(open),
            other => Err(kind_error(SeriesKind::OpenHighLowClose, other)),
        }
    }

    /// Plain value, or the close of a stock value.
    #[must_use]
    pub fn primary_value(&self) -> f64 {
        match self.data {
            ValueData::Plain { value } => value,
            ValueData::HighLowClose { close, .. } | ValueData::OpenHighLowClose { close, .. } => {
                close
            }
        }
    }

    /// `(min, max)` spanned by every component of the value.
    #[must_use]
    pub fn extent(&self) -> (f64, f64) {
        match self.data {
            ValueData::Plain { value } => (value, value),
            ValueData::HighLowClose { high, low, close } => {
                (low.min(high).min(close), high.max(low).max(close))
            }
            ValueData::OpenHighLowClose {
                open,
                high,
                low,
                close,
            } => (
                low.min(high).min(open).min(close),
                high.max(low).max(open).max(close),
            ),
        }
    }
}

fn kind_error(expected: SeriesKind, found: ValueData) -> ChartError {
    ChartError::InvalidKind {
        expected: expected.name(),
        found: found.kind().name(),
    }
}
