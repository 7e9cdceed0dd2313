use chart_geometry::api::{ChartConfig, ChartEngine};
use chart_geometry::core::axis::scale_axes;
use chart_geometry::core::geometry::{
    GeometryContext, GeometryOptions, build_series_geometry, catmull_rom_segments, participants,
};
use chart_geometry::core::{
    AutoAdjust, ChartStyle, ChartValue, PixelPoint, Series, SeriesKind, Viewport,
};
use chart_geometry::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn wave_series(name: &str, len: usize, phase: f64) -> Series {
    Series::plain(
        name,
        (0..len).map(|i| 50.0 + 40.0 * (i as f64 * 0.05 + phase).sin()),
    )
}

fn bench_stacked_area_geometry_4x2k(c: &mut Criterion) {
    let series: Vec<Series> = (0..4)
        .map(|k| wave_series(&format!("s{k}"), 2_000, k as f64))
        .collect();
    let style = ChartStyle::StackedArea;
    let drawn = participants(style, series.iter());
    let config = ChartConfig::default();
    let scale = scale_axes(
        style,
        &drawn,
        AutoAdjust::Both,
        &config.x_axis.settings(),
        &config.y_axis.settings(),
    );
    let context = GeometryContext {
        style,
        participants: &drawn,
        viewport: Viewport::new(1920, 1080),
        scale,
        options: GeometryOptions::default(),
    };

    c.bench_function("stacked_area_geometry_4x2k", |b| {
        b.iter(|| {
            for position in 0..drawn.len() {
                let _ = build_series_geometry(black_box(&context), black_box(position));
            }
        })
    });
}

fn bench_catmull_rom_10k(c: &mut Criterion) {
    let points: Vec<PixelPoint> = (0..10_000)
        .map(|i| PixelPoint::new(i as f64 * 0.2, 500.0 + 100.0 * (i as f64 * 0.01).cos()))
        .collect();

    c.bench_function("catmull_rom_10k", |b| {
        b.iter(|| {
            let _ = catmull_rom_segments(black_box(&points));
        })
    });
}

fn bench_engine_ohlc_layout_2k(c: &mut Criterion) {
    let values: Vec<ChartValue> = (0..2_000)
        .map(|i| {
            let base = 100.0 + i as f64 * 0.05;
            let close = if i % 2 == 0 { base + 1.0 } else { base - 1.0 };
            ChartValue::open_high_low_close(base, base + 2.0, base - 2.0, close)
        })
        .collect();
    let series = Series::with_values("ohlc", SeriesKind::OpenHighLowClose, values)
        .expect("ohlc values");
    let config = ChartConfig::new(Viewport::new(1600, 900)).with_style(ChartStyle::OpenHighLowClose);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.add_series(series);

    c.bench_function("engine_ohlc_layout_2k", |b| {
        b.iter(|| {
            engine.on_series_changed();
            engine.render().expect("render");
        })
    });
}

criterion_group!(
    benches,
    bench_stacked_area_geometry_4x2k,
    bench_catmull_rom_10k,
    bench_engine_ohlc_layout_2k
);
criterion_main!(benches);
