use approx::abs_diff_eq;
use chart_geometry::api::{ChartConfig, ChartEngine};
use chart_geometry::core::{
    BrushRole, ChartStyle, FlowDirection, PixelPoint, PixelRect, Series, Shape, Viewport,
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

fn near(a: PixelPoint, x: f64, y: f64) -> bool {
    abs_diff_eq!(a.x, x, epsilon = 1e-9) && abs_diff_eq!(a.y, y, epsilon = 1e-9)
}

fn rect_near(a: PixelRect, x: f64, y: f64, width: f64, height: f64) -> bool {
    near(PixelPoint::new(a.x, a.y), x, y)
        && abs_diff_eq!(a.width, width, epsilon = 1e-9)
        && abs_diff_eq!(a.height, height, epsilon = 1e-9)
}

#[test]
fn radar_places_categories_clockwise_from_top() {
    let config = ChartConfig::new(Viewport::new(200, 200)).with_style(ChartStyle::Radar);
    let frame = layout(config, vec![Series::plain("Skills", [1.0, 1.0, 1.0, 1.0])]);

    let geometry = &frame.series[0].geometry;
    match &geometry.fragments[0].shape {
        Shape::Polyline { points, closed } => {
            assert!(*closed);
            assert!(near(points[0], 100.0, 10.0));
            assert!(near(points[1], 190.0, 100.0));
            assert!(near(points[2], 100.0, 190.0));
            assert!(near(points[3], 10.0, 100.0));
        }
        other => panic!("expected closed polyline, got {other:?}"),
    }
    assert_eq!(geometry.hit_regions.len(), 4);
}

#[test]
fn radar_area_fills_a_polygon_and_markers_variant_adds_markers() {
    let series = || vec![Series::plain("Skills", [1.0, 0.5, 1.0])];

    let area = layout(
        ChartConfig::new(Viewport::new(200, 200)).with_style(ChartStyle::RadarArea),
        series(),
    );
    assert!(matches!(
        area.series[0].geometry.fragments[0].shape,
        Shape::Polygon { .. }
    ));

    let markers = layout(
        ChartConfig::new(Viewport::new(200, 200)).with_style(ChartStyle::RadarWithMarkers),
        series(),
    );
    assert_eq!(markers.series[0].geometry.fragments.len(), 4);
}

#[test]
fn waterfall_bars_carry_the_running_total() {
    let config = ChartConfig::new(Viewport::new(300, 200)).with_style(ChartStyle::Waterfall);
    let frame = layout(config, vec![Series::plain("Cash", [10.0, -4.0, 6.0])]);

    // Running totals 0, 10, 6, 12 round the value axis up to 20.
    let fragments = &frame.series[0].geometry.fragments;
    let rects: Vec<PixelRect> = fragments
        .iter()
        .map(|fragment| match fragment.shape {
            Shape::Rect(rect) => rect,
            ref other => panic!("expected rect, got {other:?}"),
        })
        .collect();
    assert!(rect_near(rects[0], 10.0, 100.0, 80.0, 100.0));
    assert!(rect_near(rects[1], 110.0, 100.0, 80.0, 40.0));
    assert!(rect_near(rects[2], 210.0, 80.0, 80.0, 60.0));

    let roles: Vec<BrushRole> = fragments.iter().map(|fragment| fragment.role).collect();
    assert_eq!(
        roles,
        vec![BrushRole::Main, BrushRole::Secondary, BrushRole::Main]
    );
}

#[test]
fn waterfall_role_legend_is_visible() {
    let config = ChartConfig::new(Viewport::new(300, 200)).with_style(ChartStyle::Waterfall);
    let frame = layout(config, vec![Series::plain("Cash", [10.0, -4.0])]);

    let roles: Vec<(&str, bool)> = frame.legend[1..]
        .iter()
        .map(|entry| (entry.text.as_str(), entry.visible))
        .collect();
    assert_eq!(roles, vec![("Increase", true), ("Decrease", true)]);
    assert_eq!(frame.legend[1].color, frame.series[0].main_color);
    assert_eq!(frame.legend[2].color, frame.series[0].secondary_color);
}

#[test]
fn funnel_segments_narrow_towards_the_next_value() {
    let config = ChartConfig::new(Viewport::new(200, 300)).with_style(ChartStyle::Funnel);
    let frame = layout(config, vec![Series::plain("Pipeline", [100.0, 50.0, 25.0])]);

    let geometry = &frame.series[0].geometry;
    assert_eq!(geometry.fragments.len(), 3);
    match &geometry.fragments[0].shape {
        Shape::Polygon { points } => {
            assert!(near(points[0], 0.0, 0.0));
            assert!(near(points[1], 200.0, 0.0));
            assert!(near(points[2], 150.0, 100.0));
            assert!(near(points[3], 50.0, 100.0));
        }
        other => panic!("expected polygon, got {other:?}"),
    }
    match &geometry.fragments[2].shape {
        Shape::Polygon { points } => {
            assert!(near(points[0], 75.0, 200.0));
            assert!(near(points[2], 125.0, 300.0));
        }
        other => panic!("expected polygon, got {other:?}"),
    }
    assert_eq!(geometry.fragments[1].role, BrushRole::Indexed(1));
    assert!(frame.x_ticks.is_empty());
    assert_eq!(
        geometry
            .hit_test(PixelPoint::new(100.0, 150.0))
            .map(|region| region.value_index),
        Some(1)
    );
}

#[test]
fn funnel_skips_hidden_values() {
    let config = ChartConfig::new(Viewport::new(200, 300)).with_style(ChartStyle::Funnel);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    let id = engine.add_series(Series::plain("Pipeline", [100.0, 50.0, 25.0]));
    engine.set_value_visibility(id, 1, false).expect("hide value");

    let geometry = &engine.layout().series[0].geometry;
    let indices: Vec<Option<usize>> = geometry
        .fragments
        .iter()
        .map(|fragment| fragment.value_index)
        .collect();
    assert_eq!(indices, vec![Some(0), Some(2)]);
}

#[test]
fn bubble_area_scales_with_magnitude() {
    let config = ChartConfig::new(Viewport::new(400, 200)).with_style(ChartStyle::Bubbles);
    let frame = layout(config, vec![Series::plain("Volume", [1.0, 4.0])]);

    let bubbles: Vec<(PixelPoint, f64)> = frame.series[0]
        .geometry
        .fragments
        .iter()
        .map(|fragment| match fragment.shape {
            Shape::Ellipse {
                center, radius_x, ..
            } => (center, radius_x),
            ref other => panic!("expected ellipse, got {other:?}"),
        })
        .collect();
    assert!(near(bubbles[0].0, 100.0, 160.0));
    assert!((bubbles[0].1 - 12.5).abs() <= 1e-9);
    assert!(near(bubbles[1].0, 300.0, 40.0));
    assert!((bubbles[1].1 - 25.0).abs() <= 1e-9);
}

#[test]
fn mirrored_funnel_stays_centered() {
    let config = ChartConfig::new(Viewport::new(200, 300))
        .with_style(ChartStyle::Funnel)
        .with_flow(FlowDirection::RightToLeft);
    let frame = layout(config, vec![Series::plain("Pipeline", [100.0, 50.0])]);

    let bounds = frame.series[0].geometry.hit_regions[1].bounds;
    assert!((bounds.center().x - 100.0).abs() <= 1e-9);
}
