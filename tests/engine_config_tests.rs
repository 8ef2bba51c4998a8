use gap_chart::api::{
    GapChartConfig, GapChartEngine, GapLabelPosition, GapType, PropertyBag, SortOrder,
    VisualUpdate, validate_config,
};
use gap_chart::core::Color;
use gap_chart::render::NullRenderer;
use gap_chart::GapChartError;
use serde_json::json;

#[test]
fn empty_property_bag_resolves_defaults() {
    let config = GapChartConfig::from_property_bag(&PropertyBag::new());
    assert_eq!(config, GapChartConfig::default());

    assert!(config.statement.show_labels);
    assert!(!config.sort.enabled);
    assert_eq!(config.sort.order, SortOrder::Descending);
    assert_eq!(config.gap_type, GapType::Lift);
    assert_eq!(config.gap_label.position, GapLabelPosition::Auto);
    assert_eq!(config.gap_bar.height, 16.0);
    assert_eq!(config.selector_height, 24.0);
    assert_eq!(config.general.format_string, None);
    validate_config(&config).expect("defaults are valid");
}

#[test]
fn property_groups_override_defaults() {
    let bag = PropertyBag::new()
        .with_property("statementproperties", "fontSize", 12.0)
        .with_property("statementsortproperties", "enabled", true)
        .with_property("statementsortproperties", "statementSortOrderDefault", "ascending")
        .with_property("gaptypeproperties", "gapTypeDefault", "Difference")
        .with_property("gapbarproperties", "defaultHeight", 20.0)
        .with_property("gaplabelproperties", "defaultPosition", "below")
        .with_property("general", "formatString", "0.0%");
    let config = GapChartConfig::from_property_bag(&bag);

    assert_eq!(config.statement.font_size, 12.0);
    assert!(config.sort.enabled);
    assert_eq!(config.sort.order, SortOrder::Ascending);
    assert_eq!(config.gap_type, GapType::Difference);
    assert_eq!(config.gap_bar.height, 20.0);
    assert_eq!(config.gap_label.position, GapLabelPosition::Below);
    assert_eq!(config.general.format_string.as_deref(), Some("0.0%"));
}

#[test]
fn fill_objects_and_css_strings_are_both_colors() {
    let bag = PropertyBag::new()
        .with_property("gapbarproperties", "defaultColor", json!({ "solid": { "color": "#ff0000" } }))
        .with_property("groupnodeproperties", "defaultColor", "#0000ff");
    let config = GapChartConfig::from_property_bag(&bag);

    assert_eq!(config.gap_bar.color, Color::from_rgb8(255, 0, 0));
    assert_eq!(config.node.group_color, Color::from_rgb8(0, 0, 255));
}

#[test]
fn malformed_values_fall_back_to_defaults() {
    let bag = PropertyBag::new()
        .with_property("statementproperties", "fontSize", "large")
        .with_property("gaptypeproperties", "gapTypeDefault", "ratio")
        .with_property("gapbarproperties", "defaultColor", "not a color")
        .with_property("general", "formatString", "   ");
    let config = GapChartConfig::from_property_bag(&bag);
    let defaults = GapChartConfig::default();

    assert_eq!(config.statement.font_size, defaults.statement.font_size);
    assert_eq!(config.gap_type, defaults.gap_type);
    assert_eq!(config.gap_bar.color, defaults.gap_bar.color);
    assert_eq!(config.general.format_string, None);
}

#[test]
fn non_positive_sizes_are_invalid() {
    let config = GapChartConfig::default().with_gap_bar_height(0.0);
    assert!(matches!(
        validate_config(&config),
        Err(GapChartError::InvalidConfig(_))
    ));
}

#[test]
fn invalid_property_bag_fails_the_pass() {
    let bag = PropertyBag::new().with_property("gapbarproperties", "defaultHeight", -4.0);
    let update = VisualUpdate {
        viewport: gap_chart::core::Viewport::new(400, 300),
        properties: bag,
        result_sets: Vec::new(),
    };
    let mut engine = GapChartEngine::new(NullRenderer::default());
    assert!(matches!(
        engine.layout(&update),
        Err(GapChartError::InvalidConfig(_))
    ));
}

#[test]
fn visual_update_deserializes_from_host_json() {
    let raw = json!({
        "viewport": { "width": 640, "height": 480 },
        "properties": { "gaptypeproperties": { "gapTypeDefault": "difference" } },
        "result_sets": [{
            "categories": ["Q1"],
            "values": [
                { "group_name": "2015", "display_name": "Sales", "values": [1.0] },
                { "group_name": "2016", "display_name": "Sales", "values": [2.0] }
            ]
        }]
    });
    let update: VisualUpdate = serde_json::from_value(raw).expect("valid update json");

    assert_eq!(update.result_sets[0].series_count(), 2);
    let mut engine = GapChartEngine::new(NullRenderer::default());
    let outcome = engine.layout(&update).expect("layout pass");
    let layout = outcome.layout().expect("ready layout");
    assert_eq!(layout.config.gap_type, GapType::Difference);
    assert_eq!(layout.records[0].targets[0].gap.as_ref().map(|gap| gap.value), Some(1.0));
}
