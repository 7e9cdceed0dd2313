use chart_geometry::api::{ChartConfig, ChartEngine};
use chart_geometry::core::{
    BrushRole, ChartBoundary, ChartStyle, FlowDirection, PixelPoint, Series, Shape, Viewport,
};
use chart_geometry::render::{NullRenderer, RenderFrame};

fn layout(config: ChartConfig, series: Vec<Series>) -> RenderFrame {
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    for item in series {
        engine.add_series(item);
    }
    engine.render().expect("render");
    engine.layout().clone()
}

fn assert_point(actual: PixelPoint, x: f64, y: f64) {
    assert!(
        (actual.x - x).abs() <= 1e-9 && (actual.y - y).abs() <= 1e-9,
        "expected ({x}, {y}), got ({}, {})",
        actual.x,
        actual.y
    );
}

fn polyline_points(shape: &Shape) -> &[PixelPoint] {
    match shape {
        Shape::Polyline { points, .. } => points,
        other => panic!("expected polyline, got {other:?}"),
    }
}

#[test]
fn lines_map_values_into_category_slots() {
    let config = ChartConfig::new(Viewport::new(400, 200)).with_style(ChartStyle::Lines);
    let frame = layout(config, vec![Series::plain("Sales", [0.0, 50.0, 100.0])]);

    let geometry = &frame.series[0].geometry;
    assert_eq!(geometry.fragments.len(), 1);
    let points = polyline_points(&geometry.fragments[0].shape);
    assert_eq!(points.len(), 3);
    let slot = 400.0 / 3.0;
    assert_point(points[0], slot * 0.5, 200.0);
    assert_point(points[1], slot * 1.5, 100.0);
    assert_point(points[2], slot * 2.5, 0.0);
    assert_eq!(geometry.hit_regions.len(), 3);
    assert_eq!(geometry.hit_regions[1].value_index, 1);
}

#[test]
fn boundary_without_offset_touches_plot_edges() {
    let config = ChartConfig::new(Viewport::new(400, 200))
        .with_style(ChartStyle::Lines)
        .with_boundary(ChartBoundary::WithoutOffset);
    let frame = layout(config, vec![Series::plain("Sales", [0.0, 50.0, 100.0])]);

    let points = polyline_points(&frame.series[0].geometry.fragments[0].shape);
    assert_point(points[0], 0.0, 200.0);
    assert_point(points[1], 200.0, 100.0);
    assert_point(points[2], 400.0, 0.0);
}

#[test]
fn right_to_left_flow_mirrors_x() {
    let config = ChartConfig::new(Viewport::new(400, 200))
        .with_style(ChartStyle::Lines)
        .with_flow(FlowDirection::RightToLeft);
    let frame = layout(config, vec![Series::plain("Sales", [0.0, 50.0, 100.0])]);

    let points = polyline_points(&frame.series[0].geometry.fragments[0].shape);
    let slot = 400.0 / 3.0;
    assert_point(points[0], 400.0 - slot * 0.5, 200.0);
    assert_point(points[2], 400.0 - slot * 2.5, 0.0);
}

#[test]
fn marker_styles_add_one_marker_per_value() {
    let config =
        ChartConfig::new(Viewport::new(400, 200)).with_style(ChartStyle::LinesWithMarkers);
    let frame = layout(config, vec![Series::plain("Sales", [0.0, 50.0, 100.0])]);

    let fragments = &frame.series[0].geometry.fragments;
    assert_eq!(fragments.len(), 4);
    for (index, fragment) in fragments[1..].iter().enumerate() {
        assert_eq!(fragment.value_index, Some(index));
        assert_eq!(fragment.role, BrushRole::Main);
        match fragment.shape {
            Shape::Ellipse {
                radius_x, radius_y, ..
            } => {
                assert_eq!(radius_x, 4.0);
                assert_eq!(radius_y, 4.0);
            }
            ref other => panic!("expected ellipse marker, got {other:?}"),
        }
    }
}

#[test]
fn single_value_draws_marker_instead_of_segment() {
    let config = ChartConfig::new(Viewport::new(400, 200)).with_style(ChartStyle::Lines);
    let frame = layout(config, vec![Series::plain("Solo", [5.0])]);

    let fragments = &frame.series[0].geometry.fragments;
    assert_eq!(fragments.len(), 1);
    match fragments[0].shape {
        Shape::Ellipse { center, .. } => assert_point(center, 200.0, 0.0),
        ref other => panic!("expected marker, got {other:?}"),
    }
}

#[test]
fn smooth_lines_emit_one_bezier_segment_per_gap() {
    let config = ChartConfig::new(Viewport::new(400, 200)).with_style(ChartStyle::SmoothLines);
    let frame = layout(config, vec![Series::plain("Sales", [0.0, 50.0, 100.0])]);

    match &frame.series[0].geometry.fragments[0].shape {
        Shape::BezierPath {
            start,
            segments,
            closed,
        } => {
            assert_point(*start, 400.0 / 6.0, 200.0);
            assert_eq!(segments.len(), 2);
            assert_point(segments[1].end, 400.0 / 3.0 * 2.5, 0.0);
            assert!(!closed);
        }
        other => panic!("expected bezier path, got {other:?}"),
    }
}

#[test]
fn empty_series_yields_no_geometry() {
    let config = ChartConfig::new(Viewport::new(400, 200)).with_style(ChartStyle::Lines);
    let frame = layout(
        config,
        vec![
            Series::plain("Empty", std::iter::empty()),
            Series::plain("Full", [1.0, 2.0]),
        ],
    );

    assert!(frame.series[0].geometry.is_empty());
    assert!(frame.series[0].geometry.hit_regions.is_empty());
    assert!(!frame.series[1].geometry.is_empty());
}

#[test]
fn hidden_series_are_not_drawn() {
    let config = ChartConfig::new(Viewport::new(400, 200)).with_style(ChartStyle::Lines);
    let frame = layout(
        config,
        vec![
            Series::plain("Hidden", [1.0, 2.0]).with_visible(false),
            Series::plain("Shown", [3.0, 4.0]),
        ],
    );

    assert_eq!(frame.series.len(), 1);
    assert_eq!(frame.series[0].series_index, 1);
    assert_eq!(frame.series[0].name, "Shown");
}

#[test]
fn stacked_lines_sit_on_previous_series() {
    let config = ChartConfig::new(Viewport::new(400, 200)).with_style(ChartStyle::StackedLines);
    let frame = layout(
        config,
        vec![
            Series::plain("a", [10.0, 20.0]),
            Series::plain("b", [10.0, 30.0]),
        ],
    );

    // Auto value axis rounds the stacked max of 50 to 50.
    let top = polyline_points(&frame.series[1].geometry.fragments[0].shape);
    assert_point(top[0], 100.0, 200.0 - 20.0 / 50.0 * 200.0);
    assert_point(top[1], 300.0, 0.0);
}
