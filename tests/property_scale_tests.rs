use gap_chart::api::{GapChartEngine, MIN_BAR_WIDTH_PX, VisualUpdate};
use gap_chart::core::{CategoricalDataset, LinearScale, ValueSeries, Viewport};
use gap_chart::render::NullRenderer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn scale_keeps_domain_inside_range(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        range_start in 0.0f64..500.0,
        range_span in 1.0f64..2_000.0,
        a_factor in 0.0f64..1.0,
        b_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let range_end = range_start + range_span;
        let scale = LinearScale::new((domain_start, domain_end), (range_start, range_end))
            .expect("valid scale");

        let a = domain_start + a_factor * domain_span;
        let b = domain_start + b_factor * domain_span;
        let (pa, pb) = (scale.map(a), scale.map(b));

        prop_assert!(pa >= range_start - 1e-6 && pa <= range_end + 1e-6);
        if a < b {
            prop_assert!(pa <= pb + 1e-9);
        }
    }

    #[test]
    fn engine_nodes_stay_on_the_bar(
        baseline in proptest::collection::vec(-1_000.0f64..1_000.0, 1..12),
        offsets in proptest::collection::vec(-500.0f64..500.0, 12),
        width in 120u32..1_600,
        height in 80u32..1_200
    ) {
        let count = baseline.len();
        let target: Vec<f64> = baseline
            .iter()
            .zip(&offsets)
            .map(|(value, offset)| value + offset)
            .collect();
        let categories = (0..count).map(|index| format!("Statement {index}")).collect();
        let dataset = CategoricalDataset::new(
            categories,
            vec![
                ValueSeries::new("Baseline", "Score", baseline),
                ValueSeries::new("Target", "Score", target),
            ],
        );

        let mut engine = GapChartEngine::new(NullRenderer::default());
        let outcome = engine
            .update(&VisualUpdate::new(Viewport::new(width, height), dataset))
            .expect("update pass");
        let layout = outcome.layout().expect("ready layout");
        let frame = &layout.frame;
        let (range_start, range_end) = frame.scale.range();

        prop_assert!(frame.bar_width >= MIN_BAR_WIDTH_PX);
        prop_assert_eq!(layout.scroll.horizontal, frame.needs_horizontal_scroll);
        prop_assert_eq!(layout.records.len(), count);
        for record in &layout.records {
            prop_assert!(record.min_x <= record.max_x);
            for node in record.nodes() {
                let low = range_start.min(range_end) - 1e-6;
                let high = range_start.max(range_end) + 1e-6;
                prop_assert!(node.x >= low && node.x <= high);
            }
        }
    }
}
