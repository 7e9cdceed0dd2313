use chart_geometry::api::{AxisConfig, ChartConfig, ChartEngine};
use chart_geometry::core::axis::{
    AxisSettings, auto_value_bounds, axis_ticks, coerce_sections, observed_extent, scale_axes,
    tick_label,
};
use chart_geometry::core::{
    AutoAdjust, AxisKind, AxisRange, ChartStyle, FlowDirection, NumberFormat, Series, Shape,
    Viewport,
};
use chart_geometry::render::NullRenderer;

fn settings(min: f64, max: f64, sections: u32) -> AxisSettings {
    AxisSettings {
        min,
        max,
        sections,
        format: NumberFormat::default(),
        custom_labels: Vec::new(),
    }
}

#[test]
fn manual_bounds_are_returned_untouched() {
    let series = Series::plain("a", [1_000.0, -3.0]);
    let participants = [&series];
    let scale = scale_axes(
        ChartStyle::Lines,
        &participants,
        AutoAdjust::None,
        &settings(0.0, 10.0, 5),
        &settings(-5.0, 42.5, 7),
    );

    assert_eq!((scale.x.min, scale.x.max, scale.x.sections), (0.0, 10.0, 5));
    assert_eq!((scale.y.min, scale.y.max, scale.y.sections), (-5.0, 42.5, 7));
    assert!(!scale.x.auto && !scale.y.auto);
}

#[test]
fn auto_value_axis_rounds_outwards() {
    assert_eq!(auto_value_bounds(Some((3.0, 47.0))), (0.0, 50.0));
    assert_eq!(auto_value_bounds(Some((-13.0, 7.0))), (-20.0, 10.0));
    assert_eq!(auto_value_bounds(Some((0.0, 0.0))), (0.0, 1.0));
    assert_eq!(auto_value_bounds(None), (0.0, 1.0));
    assert_eq!(auto_value_bounds(Some((-2.2, -1.0))), (-2.5, 0.0));
}

#[test]
fn auto_category_axis_spans_longest_series() {
    let short = Series::plain("short", [1.0, 2.0]);
    let long = Series::plain("long", [1.0, 2.0, 3.0, 4.0, 5.0]);
    let participants = [&short, &long];
    let scale = scale_axes(
        ChartStyle::Lines,
        &participants,
        AutoAdjust::Horizontal,
        &settings(0.0, 1.0, 10),
        &settings(0.0, 100.0, 10),
    );

    assert_eq!((scale.x.min, scale.x.max), (0.0, 5.0));
    assert!(scale.x.auto);
    assert_eq!((scale.y.min, scale.y.max), (0.0, 100.0));
}

#[test]
fn full_stacked_value_axis_is_percent() {
    let a = Series::plain("a", [3.0]);
    let participants = [&a];
    let scale = scale_axes(
        ChartStyle::FullStackedBars,
        &participants,
        AutoAdjust::None,
        &settings(0.0, 10.0, 10),
        &settings(0.0, 10.0, 10),
    );

    // Horizontal style: values on X.
    assert_eq!((scale.x.min, scale.x.max), (0.0, 100.0));
    assert_eq!((scale.y.min, scale.y.max), (0.0, 10.0));
}

#[test]
fn observed_extent_follows_style_family() {
    let a = Series::plain("a", [2.0, -1.0]);
    let b = Series::plain("b", [3.0, 4.0]);
    let participants = [&a, &b];

    assert_eq!(
        observed_extent(ChartStyle::Lines, &participants),
        Some((-1.0, 4.0))
    );
    assert_eq!(
        observed_extent(ChartStyle::StackedColumns, &participants),
        Some((-1.0, 5.0))
    );
    assert_eq!(
        observed_extent(ChartStyle::Waterfall, &participants[..1]),
        Some((0.0, 2.0))
    );
    assert_eq!(observed_extent(ChartStyle::Lines, &[]), None);
}

#[test]
fn section_count_is_coerced() {
    assert_eq!(coerce_sections(0), 10);
    assert_eq!(coerce_sections(-3), 10);
    assert_eq!(coerce_sections(4), 4);
    assert!(AxisRange::new(0.0, 1.0, 0).expect("valid range").sections == 10);
    assert!(AxisRange::new(1.0, 1.0, 4).is_err());
}

#[test]
fn ticks_are_inverted_on_y_and_mirrored_for_right_to_left() {
    let range = AxisRange::new(0.0, 100.0, 4).expect("valid range");
    let viewport = Viewport::new(400, 200);

    let y = axis_ticks(
        range,
        &settings(0.0, 100.0, 4),
        AxisKind::Y,
        viewport,
        FlowDirection::LeftToRight,
    );
    assert_eq!(y.len(), 5);
    assert_eq!(y[0].position, 200.0);
    assert_eq!(y[4].position, 0.0);

    let x = axis_ticks(
        range,
        &settings(0.0, 100.0, 4),
        AxisKind::X,
        viewport,
        FlowDirection::RightToLeft,
    );
    assert_eq!(x[0].position, 400.0);
    assert_eq!(x[4].position, 0.0);

    let none = axis_ticks(
        range,
        &settings(0.0, 100.0, 4),
        AxisKind::X,
        Viewport::new(0, 0),
        FlowDirection::LeftToRight,
    );
    assert!(none.is_empty());
}

#[test]
fn custom_labels_replace_numbers_by_position() {
    let mut axis = settings(0.0, 3.0, 3);
    axis.custom_labels = vec!["Q1".to_owned(), "Q2".to_owned()];

    assert_eq!(tick_label(0.0, 0, &axis), "Q1");
    assert_eq!(tick_label(1.0, 1, &axis), "Q2");
    assert_eq!(tick_label(2.0, 2, &axis), "2");
}

#[test]
fn engine_ticks_use_axis_format_and_custom_labels() {
    let config = ChartConfig::new(Viewport::new(400, 200))
        .with_auto_adjust(AutoAdjust::None)
        .with_x_axis(
            AxisConfig::default()
                .with_bounds(0.0, 2.0)
                .with_sections(2)
                .with_custom_labels(vec!["Jan".to_owned(), "Feb".to_owned()]),
        )
        .with_y_axis(
            AxisConfig::default()
                .with_bounds(0.0, 1.0)
                .with_sections(2)
                .with_format("0.0"),
        );
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.add_series(Series::plain("a", [0.2, 0.8]));

    let frame = engine.layout();
    let x_labels: Vec<&str> = frame.x_ticks.iter().map(|t| t.label.as_str()).collect();
    let y_labels: Vec<&str> = frame.y_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(x_labels, vec!["Jan", "Feb", "2"]);
    assert_eq!(y_labels, vec!["0.0", "0.5", "1.0"]);
}

#[test]
fn category_ticks_span_the_edges_while_points_sit_in_slot_centers() {
    let config = ChartConfig::new(Viewport::new(400, 200))
        .with_auto_adjust(AutoAdjust::None)
        .with_x_axis(AxisConfig::default().with_bounds(0.0, 2.0).with_sections(2))
        .with_y_axis(AxisConfig::default().with_bounds(0.0, 1.0).with_sections(2));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.add_series(Series::plain("a", [0.2, 0.8]));

    let frame = engine.layout();
    let tick_positions: Vec<f64> = frame.x_ticks.iter().map(|tick| tick.position).collect();
    assert_eq!(tick_positions, vec![0.0, 200.0, 400.0]);

    match &frame.series[0].geometry.fragments[0].shape {
        Shape::Polyline { points, .. } => {
            assert!((points[0].x - 100.0).abs() <= 1e-9);
            assert!((points[1].x - 300.0).abs() <= 1e-9);
        }
        other => panic!("expected polyline, got {other:?}"),
    }
}
