use approx::assert_relative_eq;
use gap_chart::api::{
    GapChartEngine, GapTrend, LayoutServices, PropertyBag, RenderOutcome, RenderPhase,
    VisualUpdate,
};
use gap_chart::core::{
    CategoricalDataset, Color, FixedColorPalette, TextBox, TextMeasurer, ValueSeries, Viewport,
};
use gap_chart::render::NullRenderer;
use gap_chart::GapChartError;
use serde_json::json;

struct FixedMeasurer;

impl TextMeasurer for FixedMeasurer {
    fn measure_text_box(&self, _font_family: &str, _font_size_px: f64, text: &str) -> TextBox {
        TextBox::new(text.chars().count() as f64 * 6.0, 10.0)
    }
}

fn red() -> Color {
    Color::from_rgb8(255, 0, 0)
}

fn blue() -> Color {
    Color::from_rgb8(0, 0, 255)
}

fn engine() -> GapChartEngine<NullRenderer> {
    let services = LayoutServices::new()
        .with_measurer(FixedMeasurer)
        .with_palette(FixedColorPalette::new(vec![red(), blue()]).expect("non-empty palette"));
    GapChartEngine::with_services(NullRenderer::default(), services)
}

fn quarterly_sales() -> CategoricalDataset {
    CategoricalDataset::new(
        vec!["Q1".to_owned(), "Q2".to_owned()],
        vec![
            ValueSeries::new("2015", "Sales", vec![100.0, 200.0]),
            ValueSeries::new("2016", "Sales", vec![150.0, 180.0]),
        ],
    )
}

fn difference_update(viewport: Viewport) -> VisualUpdate {
    let properties =
        PropertyBag::new().with_property("gaptypeproperties", "gapTypeDefault", json!("Difference"));
    VisualUpdate::new(viewport, quarterly_sales()).with_properties(properties)
}

#[test]
fn full_pass_produces_signed_gaps_and_palette_colors() {
    let mut engine = engine();
    let outcome = engine
        .layout(&difference_update(Viewport::new(800, 600)))
        .expect("layout pass");

    let layout = outcome.layout().expect("ready layout");
    assert_eq!(engine.phase(), RenderPhase::Ready);
    assert_eq!(layout.records.len(), 2);

    let q1 = layout.records[0].targets[0].gap.as_ref().expect("q1 gap");
    let q2 = layout.records[1].targets[0].gap.as_ref().expect("q2 gap");
    assert_eq!(q1.value, 50.0);
    assert_eq!(q1.trend, GapTrend::Improvement);
    assert_eq!(q2.value, -20.0);
    assert_eq!(q2.trend, GapTrend::Regression);

    assert_eq!(layout.records[0].color, red());
    assert_eq!(layout.records[1].color, blue());
    assert_eq!(layout.metadata.baseline.label, "2015");
    assert_eq!(engine.selector().selected(), Some("2015"));
    assert_eq!(engine.selector().options().len(), 2);
}

#[test]
fn rows_and_containers_are_stacked() {
    let mut engine = engine();
    let outcome = engine
        .layout(&difference_update(Viewport::new(800, 600)))
        .expect("layout pass");
    let layout = outcome.layout().expect("ready layout");

    assert!(!layout.scroll.vertical);
    assert!(!layout.scroll.horizontal);
    assert_relative_eq!(layout.containers.heights.selector, 32.0);
    assert_relative_eq!(
        layout.containers.heights.legend_and_hover,
        8.0 + layout.legend.height + layout.hover.height
    );
    assert_relative_eq!(layout.containers.series_column_width, 32.0);

    assert_eq!(layout.rows.rows.len(), 2);
    assert_relative_eq!(layout.rows.rows[0].statement_y.expect("first row label"), 21.6);
    assert_relative_eq!(layout.rows.rows[0].bar_center_y, 27.0);
    assert_relative_eq!(layout.rows.rows[1].top, 54.0);
    assert_relative_eq!(layout.rows.content_height, 108.0);
}

#[test]
fn repeated_layout_is_idempotent() {
    let mut engine = engine();
    let update = difference_update(Viewport::new(800, 600));

    let first = engine.layout(&update).expect("first pass");
    let second = engine.layout(&update).expect("second pass");
    assert_eq!(first, second);
    assert_eq!(engine.selector().generation(), 1);
}

#[test]
fn update_hands_complete_scene_to_renderer() {
    let mut engine = engine();
    let outcome = engine
        .update(&difference_update(Viewport::new(800, 600)))
        .expect("update pass");
    assert!(outcome.is_ready());

    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_line_count, 1);
    assert_eq!(renderer.last_rect_count, 2);
    assert_eq!(renderer.last_circle_count, 6);
    assert_eq!(renderer.last_text_count, 11);
}

#[test]
fn rejected_input_clears_the_surface() {
    let mut engine = engine();
    engine
        .update(&difference_update(Viewport::new(800, 600)))
        .expect("first update");

    let empty = VisualUpdate {
        viewport: Viewport::new(800, 600),
        properties: PropertyBag::new(),
        result_sets: Vec::new(),
    };
    let outcome = engine.update(&empty).expect("rejected update");

    assert_eq!(outcome, RenderOutcome::NoRender);
    assert_eq!(engine.phase(), RenderPhase::NoRender);
    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_circle_count, 0);
    assert_eq!(renderer.last_text_count, 0);
}

#[test]
fn invalid_settings_drop_the_previous_frame() {
    let mut engine = engine();
    engine
        .update(&difference_update(Viewport::new(800, 600)))
        .expect("first update");
    assert_eq!(engine.phase(), RenderPhase::Ready);

    let properties = PropertyBag::new().with_property("gapbarproperties", "defaultHeight", json!(0.0));
    let update =
        VisualUpdate::new(Viewport::new(800, 600), quarterly_sales()).with_properties(properties);
    let result = engine.update(&update);

    assert!(matches!(result, Err(GapChartError::InvalidConfig(_))));
    assert_eq!(engine.phase(), RenderPhase::NoRender);
    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_rect_count, 0);
    assert_eq!(renderer.last_circle_count, 0);
}

#[test]
fn single_group_only_refreshes_selector() {
    let mut engine = engine();
    let dataset = CategoricalDataset::new(
        vec!["Q1".to_owned()],
        vec![ValueSeries::new("2015", "Sales", vec![100.0])],
    );
    let outcome = engine
        .update(&VisualUpdate::new(Viewport::new(800, 600), dataset))
        .expect("update pass");

    assert_eq!(outcome, RenderOutcome::SelectorOnly);
    assert_eq!(engine.phase(), RenderPhase::NoRender);
    assert_eq!(engine.selector().options().len(), 1);
    assert_eq!(engine.renderer().last_rect_count, 0);
}

#[test]
fn selected_baseline_applies_on_next_pass() {
    let mut engine = engine();
    let update = difference_update(Viewport::new(800, 600));
    engine.layout(&update).expect("first pass");

    engine.select_baseline("2016");
    let outcome = engine.layout(&update).expect("second pass");
    let layout = outcome.layout().expect("ready layout");

    assert_eq!(layout.format_info.baseline_index, 1);
    assert_eq!(layout.records[0].baseline.value, 150.0);
    let gap = layout.records[0].targets[0].gap.as_ref().expect("gap");
    assert_eq!(gap.value, -50.0);
}

#[test]
fn unknown_selection_falls_back_to_first_group() {
    let mut engine = engine();
    engine.select_baseline("1999");
    let outcome = engine
        .layout(&difference_update(Viewport::new(800, 600)))
        .expect("layout pass");

    let layout = outcome.layout().expect("ready layout");
    assert_eq!(layout.format_info.baseline_index, 0);
    assert_eq!(engine.selector().selected(), Some("2015"));
}

#[test]
fn short_viewport_scrolls_and_reprojects_records() {
    let mut engine = engine();
    let outcome = engine
        .layout(&difference_update(Viewport::new(800, 200)))
        .expect("layout pass");
    let layout = outcome.layout().expect("ready layout");

    assert!(layout.scroll.vertical);
    assert_eq!(layout.frame.right_margin, 45.0);
    assert_relative_eq!(layout.frame.bar_width, 672.0);
    assert_relative_eq!(layout.records[1].baseline.x, 672.0);
}

#[test]
fn zero_sized_viewport_is_an_error() {
    let mut engine = engine();
    let result = engine.layout(&difference_update(Viewport::new(0, 600)));
    assert!(matches!(
        result,
        Err(GapChartError::InvalidViewport { width: 0, height: 600 })
    ));
    assert_eq!(engine.phase(), RenderPhase::NoRender);

    engine
        .update(&difference_update(Viewport::new(0, 600)))
        .expect_err("zero-sized update");
    assert_eq!(engine.renderer().frames_rendered, 0);
}

#[test]
fn sort_properties_reorder_statements() {
    let mut engine = engine();
    let properties = PropertyBag::new()
        .with_property("statementsortproperties", "enabled", json!(true))
        .with_property("statementsortproperties", "statementSortOrderDefault", json!("Ascending"));
    let sort_by = CategoricalDataset::new(
        vec!["Q1".to_owned(), "Q2".to_owned()],
        vec![ValueSeries::ungrouped("Rank", vec![2.0, 1.0])],
    );
    let update = VisualUpdate::new(Viewport::new(800, 600), quarterly_sales())
        .with_properties(properties)
        .with_sort_by(sort_by);

    let outcome = engine.layout(&update).expect("layout pass");
    let layout = outcome.layout().expect("ready layout");
    assert_eq!(layout.records[0].statement, "Q2");
    assert_eq!(layout.records[1].statement, "Q1");
    assert_eq!(layout.records[0].baseline.value, 200.0);
}
