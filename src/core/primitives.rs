use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub const FLOAT_TOLERANCE: f64 = 1e-9;

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Largest finite value of the iterator, ignoring NaN/inf.
#[must_use]
pub fn finite_max(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .map(OrderedFloat)
        .max()
        .map(OrderedFloat::into_inner)
}

/// Smallest finite value of the iterator, ignoring NaN/inf.
#[must_use]
pub fn finite_min(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .map(OrderedFloat)
        .min()
        .map(OrderedFloat::into_inner)
}

/// Smallest "round" number `>= value` from the 1, 2, 2.5, 5 × 10^k ladder.
///
/// Non-positive or non-finite input yields `1.0`.
#[must_use]
pub fn nice_ceiling(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }

    let magnitude = 10f64.powf(value.log10().floor());
    for factor in [1.0, 2.0, 2.5, 5.0, 10.0] {
        let candidate = factor * magnitude;
        // Guard against `log10` rounding just below an exact power of ten.
        if candidate >= value * (1.0 - FLOAT_TOLERANCE) {
            return candidate;
        }
    }
    10.0 * magnitude
}

/// Replaces NaN/inf with zero so geometry never carries non-finite coordinates.
#[must_use]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
