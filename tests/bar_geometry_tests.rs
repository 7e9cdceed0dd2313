use chart_geometry::api::{AxisConfig, ChartConfig, ChartEngine};
use chart_geometry::core::geometry::stack_extents;
use chart_geometry::core::series::stacked_totals;
use chart_geometry::core::{ChartStyle, PixelRect, Series, Shape, StackMode, Viewport};
use chart_geometry::render::{NullRenderer, RenderFrame};

fn layout(config: ChartConfig, series: Vec<Series>) -> RenderFrame {
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    for item in series {
        engine.add_series(item);
    }
    engine.render().expect("render");
    engine.layout().clone()
}

fn rect_of(shape: &Shape) -> PixelRect {
    match shape {
        Shape::Rect(rect) => *rect,
        other => panic!("expected rect, got {other:?}"),
    }
}

fn assert_rect(actual: PixelRect, x: f64, y: f64, width: f64, height: f64) {
    let close = |a: f64, b: f64| (a - b).abs() <= 1e-9;
    assert!(
        close(actual.x, x)
            && close(actual.y, y)
            && close(actual.width, width)
            && close(actual.height, height),
        "expected ({x}, {y}, {width}, {height}), got {actual:?}"
    );
}

fn three_by_three() -> Vec<Series> {
    vec![
        Series::plain("a", [1.0, 2.0, 3.0]),
        Series::plain("b", [4.0, 5.0, 6.0]),
        Series::plain("c", [7.0, 8.0, 9.0]),
    ]
}

#[test]
fn stacked_columns_top_segment_reaches_category_total() {
    let series = three_by_three();
    let participants: Vec<&Series> = series.iter().collect();

    let totals = stacked_totals(participants.iter().copied());
    assert_eq!(totals, vec![12.0, 15.0, 18.0]);

    let top = stack_extents(&participants, 2, StackMode::Stacked);
    let uppers: Vec<f64> = top.iter().map(|extent| extent.upper).collect();
    assert_eq!(uppers, vec![12.0, 15.0, 18.0]);
    assert_eq!(top[0].lower, 5.0);
}

#[test]
fn stacked_columns_frame_uses_rounded_total_axis() {
    let config = ChartConfig::new(Viewport::new(300, 200))
        .with_style(ChartStyle::StackedColumns)
        .with_y_axis(AxisConfig::default().with_sections(4));
    let frame = layout(config, three_by_three());

    // Stacked max 18 rounds up to 20.
    assert_eq!(frame.y_ticks.len(), 5);
    assert!((frame.y_ticks[4].value - 20.0).abs() <= 1e-9);

    let top = &frame.series[2].geometry;
    let tops: Vec<f64> = top
        .fragments
        .iter()
        .map(|fragment| rect_of(&fragment.shape).y)
        .collect();
    for (actual, total) in tops.iter().zip([12.0, 15.0, 18.0]) {
        assert!((actual - (200.0 - total / 20.0 * 200.0)).abs() <= 1e-9);
    }
    // Stacked bars share the full group width.
    assert_rect(rect_of(&top.fragments[0].shape), 10.0, 80.0, 80.0, 70.0);
}

#[test]
fn unstacked_columns_split_the_group_width() {
    let config = ChartConfig::new(Viewport::new(400, 200)).with_style(ChartStyle::Columns);
    let frame = layout(
        config,
        vec![Series::plain("a", [10.0]), Series::plain("b", [20.0])],
    );

    let first = rect_of(&frame.series[0].geometry.fragments[0].shape);
    let second = rect_of(&frame.series[1].geometry.fragments[0].shape);
    assert_rect(first, 40.0, 100.0, 160.0, 100.0);
    assert_rect(second, 200.0, 0.0, 160.0, 200.0);
    assert_eq!(frame.series[1].geometry.hit_regions[0].bounds, second);
}

#[test]
fn horizontal_bars_put_values_on_x() {
    let config = ChartConfig::new(Viewport::new(400, 200)).with_style(ChartStyle::Bars);
    let frame = layout(config, vec![Series::plain("a", [10.0])]);

    let rect = rect_of(&frame.series[0].geometry.fragments[0].shape);
    assert_rect(rect, 0.0, 20.0, 400.0, 160.0);
    // Value ticks run along X for horizontal styles.
    assert!((frame.x_ticks.last().expect("x ticks").value - 10.0).abs() <= 1e-9);
}

#[test]
fn full_stacked_columns_fill_the_plot_height() {
    let config =
        ChartConfig::new(Viewport::new(200, 200)).with_style(ChartStyle::FullStackedColumns);
    let frame = layout(
        config,
        vec![Series::plain("a", [1.0, 2.0]), Series::plain("b", [3.0, 2.0])],
    );

    let bottom = rect_of(&frame.series[0].geometry.fragments[0].shape);
    let top = rect_of(&frame.series[1].geometry.fragments[0].shape);
    assert_rect(bottom, 10.0, 150.0, 80.0, 50.0);
    assert_rect(top, 10.0, 0.0, 80.0, 150.0);
    assert!((frame.y_ticks.last().expect("y ticks").value - 100.0).abs() <= 1e-9);
}

#[test]
fn shorter_series_count_as_zero_when_stacking() {
    let a = Series::plain("a", [1.0]);
    let b = Series::plain("b", [2.0, 3.0]);
    assert_eq!(stacked_totals([&a, &b]), vec![3.0, 3.0]);
}
