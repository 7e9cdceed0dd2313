use chart_geometry::ChartError;
use chart_geometry::core::{ChartValue, Series, SeriesKind, ValueData};
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn accessors_match_value_kind() {
    let plain = ChartValue::plain(4.5);
    assert_eq!(plain.plain_value().expect("plain"), 4.5);
    assert!(matches!(
        plain.high_value(),
        Err(ChartError::InvalidKind { .. })
    ));

    let hlc = ChartValue::high_low_close(9.0, 3.0, 5.0);
    assert_eq!(hlc.high_value().expect("high"), 9.0);
    assert_eq!(hlc.low_value().expect("low"), 3.0);
    assert_eq!(hlc.close_value().expect("close"), 5.0);
    assert!(hlc.open_value().is_err());
    assert!(hlc.plain_value().is_err());

    let ohlc = ChartValue::open_high_low_close(4.0, 9.0, 3.0, 5.0);
    assert_eq!(ohlc.open_value().expect("open"), 4.0);
    assert_eq!(ohlc.kind(), SeriesKind::OpenHighLowClose);
    assert!(matches!(ohlc.data(), ValueData::OpenHighLowClose { .. }));
}

#[test]
fn primary_value_and_extent() {
    assert_eq!(ChartValue::plain(-2.0).primary_value(), -2.0);
    assert_eq!(ChartValue::plain(-2.0).extent(), (-2.0, -2.0));

    let bar = ChartValue::open_high_low_close(4.0, 9.0, 3.0, 5.0);
    assert_eq!(bar.primary_value(), 5.0);
    assert_eq!(bar.extent(), (3.0, 9.0));
}

#[test]
fn decimal_constructors_convert_exactly_representable_inputs() {
    let value = ChartValue::plain_decimal(Decimal::from_str("12.25").expect("decimal"))
        .expect("plain decimal");
    assert_eq!(value.plain_value().expect("plain"), 12.25);

    let bar = ChartValue::open_high_low_close_decimal(
        Decimal::from(10),
        Decimal::from(12),
        Decimal::from(8),
        Decimal::from(11),
    )
    .expect("ohlc decimal");
    assert_eq!(bar.close_value().expect("close"), 11.0);
}

#[test]
fn custom_value_and_visibility_flags() {
    let value = ChartValue::plain(1.0)
        .with_custom_value("estimate")
        .with_visible(false);
    assert_eq!(value.custom_value(), Some("estimate"));
    assert!(!value.is_visible());
    assert_eq!(ChartValue::plain(1.0).custom_value(), None);
}

#[test]
fn series_rejects_values_of_another_kind() {
    let mut series = Series::new("Prices", SeriesKind::HighLowClose);
    series
        .push(ChartValue::high_low_close(3.0, 1.0, 2.0))
        .expect("matching kind");
    let err = series
        .push(ChartValue::plain(1.0))
        .expect_err("plain value into hlc series");
    assert!(matches!(
        err,
        ChartError::InvalidKind {
            expected: "high-low-close",
            found: "plain"
        }
    ));
    assert_eq!(series.len(), 1);

    let mixed = vec![ChartValue::high_low_close(1.0, 0.0, 0.5)];
    assert!(Series::with_values("bad", SeriesKind::Plain, mixed).is_err());
}

#[test]
fn series_value_editing() {
    let mut series = Series::plain("a", [1.0, 2.0, 3.0]);
    series.set_value(1, ChartValue::plain(20.0)).expect("set");
    assert_eq!(series.plain_at(1), 20.0);

    let removed = series.remove_value(0).expect("remove");
    assert_eq!(removed.plain_value().expect("plain"), 1.0);
    assert_eq!(series.len(), 2);
    assert!(matches!(
        series.remove_value(5),
        Err(ChartError::IndexOutOfRange { index: 5, len: 2 })
    ));

    series.set_name("renamed");
    assert_eq!(series.name(), "renamed");
    series.clear_values();
    assert!(series.is_empty());
}

#[test]
fn series_aggregates() {
    let mut series = Series::plain("a", [4.0, -1.0, 6.0]);
    assert_eq!(series.sum(), 9.0);
    assert_eq!(series.max_value(), Some(6.0));
    assert_eq!(series.min_value(), Some(-1.0));
    assert_eq!(series.plain_at(10), 0.0);

    assert!(series.set_value_visible(2, false).expect("toggle"));
    assert!(!series.set_value_visible(2, false).expect("no-op toggle"));
    assert_eq!(series.visible_sum(), 3.0);
    assert!(series.has_hidden_values());
}
