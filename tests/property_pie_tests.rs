use chart_geometry::api::{ChartConfig, ChartEngine};
use chart_geometry::core::{ChartStyle, Series, Shape, Viewport};
use chart_geometry::render::NullRenderer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn visible_sweeps_cover_the_full_circle(
        values in prop::collection::vec(0.1f64..10_000.0, 1..24),
        hidden_mask in prop::collection::vec(any::<bool>(), 24)
    ) {
        let config = ChartConfig::new(Viewport::new(300, 300)).with_style(ChartStyle::Doughnut);
        let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
        let id = engine.add_series(Series::plain("slices", values.iter().copied()));

        // Keep value 0 visible so the pie never collapses.
        for (index, hide) in hidden_mask.iter().enumerate().take(values.len()).skip(1) {
            if *hide {
                engine.set_value_visibility(id, index, false).expect("hide value");
            }
        }
        let visible = 1 + hidden_mask
            .iter()
            .take(values.len())
            .skip(1)
            .filter(|hide| !**hide)
            .count();

        let frame = engine.layout().clone();
        let sweeps: Vec<f64> = frame.series[0]
            .geometry
            .fragments
            .iter()
            .filter_map(|fragment| match fragment.shape {
                Shape::Sector(sector) => Some(sector.sweep_angle),
                _ => None,
            })
            .collect();

        prop_assert_eq!(sweeps.len(), visible);
        let total: f64 = sweeps.iter().sum();
        prop_assert!((total - 360.0).abs() <= 1e-6);
        prop_assert!(sweeps.iter().all(|sweep| *sweep > 0.0));
        engine.render().expect("render pie");
    }

    #[test]
    fn legend_lists_every_value(values in prop::collection::vec(0.0f64..100.0, 0..12)) {
        let config = ChartConfig::new(Viewport::new(200, 200)).with_style(ChartStyle::SolidPie);
        let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
        engine.add_series(Series::plain("slices", values.iter().copied()));

        prop_assert_eq!(engine.legend().len(), values.len() + 2);
    }
}
