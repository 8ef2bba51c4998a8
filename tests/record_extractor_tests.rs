use approx::assert_relative_eq;
use gap_chart::api::{
    GapChartConfig, GapTrend, GapType, LayoutServices, NodeRole, build_group_metadata,
    extract_records, layout_frame, resolve_format_info,
};
use gap_chart::core::{
    CategoricalDataset, Color, DetailSeries, FixedColorPalette, TextBox, TextMeasurer,
    ValueSeries, Viewport,
};

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

fn services() -> LayoutServices {
    LayoutServices::new()
        .with_measurer(FixedMeasurer)
        .with_palette(FixedColorPalette::new(vec![red(), blue()]).expect("non-empty palette"))
}

fn dataset() -> CategoricalDataset {
    CategoricalDataset::new(
        vec!["Q1".to_owned(), "Q2".to_owned()],
        vec![
            ValueSeries::new("2015", "Sales", vec![100.0, 200.0])
                .with_details(DetailSeries::new("Responses", vec![12.0, 30.0])),
            ValueSeries::new("2016", "Sales", vec![150.0, 180.0]),
        ],
    )
}

#[test]
fn difference_gaps_carry_sign_and_trend() {
    let dataset = dataset();
    let services = services();
    let config = GapChartConfig::default().with_gap_type(GapType::Difference);
    let format_info = resolve_format_info(&dataset, None, None);
    let frame = layout_frame(&dataset, Viewport::new(800, 600), &format_info, &config, &services)
        .expect("frame layout");
    let metadata = build_group_metadata(&format_info, &config, services.palette());

    let records = extract_records(&dataset, &frame, &format_info, &metadata, &services);
    assert_eq!(records.len(), 2);

    let first = &records[0].targets[0];
    let first_gap = first.gap.as_ref().expect("difference gap");
    assert_eq!(first.series_index(), Some(1));
    assert_eq!(first_gap.value, 50.0);
    assert_eq!(first_gap.formatted, "50");
    assert_eq!(first_gap.trend, GapTrend::Improvement);

    let second_gap = records[1].targets[0].gap.as_ref().expect("difference gap");
    assert_eq!(second_gap.value, -20.0);
    assert_eq!(second_gap.formatted, "-20");
    assert_eq!(second_gap.trend, GapTrend::Regression);
}

#[test]
fn nodes_are_placed_on_the_shared_scale() {
    let dataset = dataset();
    let services = services();
    let config = GapChartConfig::default();
    let format_info = resolve_format_info(&dataset, None, None);
    let frame = layout_frame(&dataset, Viewport::new(800, 600), &format_info, &config, &services)
        .expect("frame layout");
    let metadata = build_group_metadata(&format_info, &config, services.palette());

    let records = extract_records(&dataset, &frame, &format_info, &metadata, &services);
    let second = &records[1];

    assert_eq!(second.statement, "Q2");
    assert_relative_eq!(second.baseline.x, 702.0);
    assert_relative_eq!(second.targets[0].node.x, 569.8, epsilon = 1e-9);
    assert_relative_eq!(second.min_x, 569.8, epsilon = 1e-9);
    assert_relative_eq!(second.max_x, 702.0);
    assert_eq!(second.nodes().count(), 2);
}

#[test]
fn lift_gap_is_relative_to_baseline() {
    let dataset = dataset();
    let services = services();
    let config = GapChartConfig::default().with_gap_type(GapType::Lift);
    let format_info = resolve_format_info(&dataset, None, None);
    let frame = layout_frame(&dataset, Viewport::new(800, 600), &format_info, &config, &services)
        .expect("frame layout");
    let metadata = build_group_metadata(&format_info, &config, services.palette());

    let records = extract_records(&dataset, &frame, &format_info, &metadata, &services);
    let gap = records[0].targets[0].gap.as_ref().expect("lift gap");
    assert_relative_eq!(gap.value, 0.5);
    assert_eq!(gap.formatted, "0.5");
}

#[test]
fn record_colors_come_from_the_palette_by_category() {
    let dataset = dataset();
    let services = services();
    let config = GapChartConfig::default();
    let format_info = resolve_format_info(&dataset, None, None);
    let frame = layout_frame(&dataset, Viewport::new(800, 600), &format_info, &config, &services)
        .expect("frame layout");
    let metadata = build_group_metadata(&format_info, &config, services.palette());

    let records = extract_records(&dataset, &frame, &format_info, &metadata, &services);
    assert_eq!(records[0].color, red());
    assert_eq!(records[1].color, blue());
    assert_eq!(metadata.baseline.color, config.node.baseline_color);
    assert_eq!(
        metadata.target_for_series(1).map(|group| group.color),
        Some(blue())
    );
}

#[test]
fn detail_series_feeds_hover_text() {
    let dataset = dataset();
    let services = services();
    let config = GapChartConfig::default();
    let format_info = resolve_format_info(&dataset, None, None);
    let frame = layout_frame(&dataset, Viewport::new(800, 600), &format_info, &config, &services)
        .expect("frame layout");
    let metadata = build_group_metadata(&format_info, &config, services.palette());

    let records = extract_records(&dataset, &frame, &format_info, &metadata, &services);
    let baseline = &records[0].baseline;
    let target = &records[0].targets[0].node;

    assert_eq!(baseline.detail_text(), "Responses: 12");
    assert_eq!(baseline.formatted_value, "100");
    assert_eq!(target.detail_text(), "Sales: 150");
}

#[test]
fn selected_baseline_swaps_roles() {
    let dataset = dataset();
    let services = services();
    let config = GapChartConfig::default().with_gap_type(GapType::Difference);
    let format_info = resolve_format_info(&dataset, Some("2016"), None);
    let frame = layout_frame(&dataset, Viewport::new(800, 600), &format_info, &config, &services)
        .expect("frame layout");
    let metadata = build_group_metadata(&format_info, &config, services.palette());

    assert_eq!(format_info.baseline_index, 1);
    assert_eq!(metadata.baseline.label, "2016");
    assert_eq!(metadata.targets[0].role, NodeRole::Target(0));
    assert_eq!(metadata.targets[0].color, red());

    let records = extract_records(&dataset, &frame, &format_info, &metadata, &services);
    let gap = records[0].targets[0].gap.as_ref().expect("difference gap");
    assert_eq!(records[0].baseline.value, 150.0);
    assert_eq!(gap.value, -50.0);
}
