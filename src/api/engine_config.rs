use serde::{Deserialize, Serialize};

use crate::core::Color;

use super::PropertyBag;

/// Category ordering applied by the dataset sorter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    fn from_property(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "ascending" | "asc" => Some(Self::Ascending),
            "descending" | "desc" => Some(Self::Descending),
            _ => None,
        }
    }
}

/// How a target value is compared against the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GapType {
    /// `target / baseline - 1`.
    #[default]
    Lift,
    /// `target - baseline`.
    Difference,
}

impl GapType {
    fn from_property(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "lift" => Some(Self::Lift),
            "difference" => Some(Self::Difference),
            _ => None,
        }
    }
}

/// Where the gap label sits relative to the gap bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GapLabelPosition {
    /// On the bar when it fits, otherwise below.
    #[default]
    Auto,
    Below,
}

impl GapLabelPosition {
    fn from_property(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "below" => Some(Self::Below),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementConfig {
    #[serde(default = "default_true")]
    pub show_labels: bool,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_statement_font_color")]
    pub font_color: Color,
    #[serde(default = "default_statement_clip_width")]
    pub label_clip_width: f64,
}

impl Default for StatementConfig {
    fn default() -> Self {
        Self {
            show_labels: true,
            font_size: default_font_size(),
            font_color: default_statement_font_color(),
            label_clip_width: default_statement_clip_width(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub order: SortOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    #[serde(default = "default_group_node_color")]
    pub group_color: Color,
    #[serde(default = "default_baseline_node_color")]
    pub baseline_color: Color,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            group_color: default_group_node_color(),
            baseline_color: default_baseline_node_color(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataLabelConfig {
    #[serde(default = "default_true")]
    pub show: bool,
    #[serde(default = "default_neutral_color")]
    pub color: Color,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

impl Default for DataLabelConfig {
    fn default() -> Self {
        Self {
            show: true,
            color: default_neutral_color(),
            font_size: default_font_size(),
        }
    }
}

/// Legend sizing. `font_size_pt` is in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    #[serde(default = "default_font_size")]
    pub font_size_pt: f64,
    #[serde(default = "default_legend_radius")]
    pub circle_radius: f64,
    #[serde(default = "default_legend_clip_width")]
    pub label_clip_width: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            font_size_pt: default_font_size(),
            circle_radius: default_legend_radius(),
            label_clip_width: default_legend_clip_width(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverConfig {
    #[serde(default = "default_hover_font_size")]
    pub font_size_pt: f64,
    #[serde(default = "default_hover_header")]
    pub header: String,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            font_size_pt: default_hover_font_size(),
            header: default_hover_header(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapBarConfig {
    #[serde(default = "default_gap_bar_color")]
    pub color: Color,
    #[serde(default = "default_gap_bar_height")]
    pub height: f64,
    #[serde(default)]
    pub color_by_statement: bool,
    #[serde(default = "default_improvement_color")]
    pub improvement_color: Color,
    #[serde(default = "default_regression_color")]
    pub regression_color: Color,
}

impl Default for GapBarConfig {
    fn default() -> Self {
        Self {
            color: default_gap_bar_color(),
            height: default_gap_bar_height(),
            color_by_statement: false,
            improvement_color: default_improvement_color(),
            regression_color: default_regression_color(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapLabelConfig {
    #[serde(default)]
    pub position: GapLabelPosition,
    #[serde(default = "default_color_on_bar")]
    pub color_on_bar: Color,
    #[serde(default = "default_color_below_bar")]
    pub color_below_bar: Color,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

impl Default for GapLabelConfig {
    fn default() -> Self {
        Self {
            position: GapLabelPosition::Auto,
            color_on_bar: default_color_on_bar(),
            color_below_bar: default_color_below_bar(),
            font_size: default_font_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_neutral_color")]
    pub font_color: Color,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default)]
    pub format_string: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            font_color: default_neutral_color(),
            font_size: default_font_size(),
            format_string: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontConfig {
    #[serde(default = "default_data_font_family")]
    pub data_family: String,
    #[serde(default = "default_statement_font_family")]
    pub statement_family: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            data_family: default_data_font_family(),
            statement_family: default_statement_font_family(),
        }
    }
}

/// Immutable configuration for one render pass.
///
/// Resolved once per update (usually via [`GapChartConfig::from_property_bag`])
/// and passed by reference into every pipeline stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapChartConfig {
    #[serde(default)]
    pub statement: StatementConfig,
    #[serde(default)]
    pub sort: SortConfig,
    #[serde(default)]
    pub node: NodeConfig,
    #[serde(default)]
    pub data_label: DataLabelConfig,
    #[serde(default)]
    pub legend: LegendConfig,
    #[serde(default)]
    pub hover: HoverConfig,
    #[serde(default)]
    pub gap_bar: GapBarConfig,
    #[serde(default)]
    pub gap_type: GapType,
    #[serde(default)]
    pub gap_label: GapLabelConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub fonts: FontConfig,
    #[serde(default = "default_selector_height")]
    pub selector_height: f64,
}

impl Default for GapChartConfig {
    fn default() -> Self {
        Self {
            statement: StatementConfig::default(),
            sort: SortConfig::default(),
            node: NodeConfig::default(),
            data_label: DataLabelConfig::default(),
            legend: LegendConfig::default(),
            hover: HoverConfig::default(),
            gap_bar: GapBarConfig::default(),
            gap_type: GapType::default(),
            gap_label: GapLabelConfig::default(),
            general: GeneralConfig::default(),
            fonts: FontConfig::default(),
            selector_height: default_selector_height(),
        }
    }
}

impl GapChartConfig {
    #[must_use]
    pub fn with_gap_type(mut self, gap_type: GapType) -> Self {
        self.gap_type = gap_type;
        self
    }

    #[must_use]
    pub fn with_sort(mut self, enabled: bool, order: SortOrder) -> Self {
        self.sort = SortConfig { enabled, order };
        self
    }

    #[must_use]
    pub fn with_statement_labels(mut self, show: bool) -> Self {
        self.statement.show_labels = show;
        self
    }

    #[must_use]
    pub fn with_gap_bar_height(mut self, height: f64) -> Self {
        self.gap_bar.height = height;
        self
    }

    /// Resolves every setting from a host property bag; absent keys keep the defaults.
    #[must_use]
    pub fn from_property_bag(bag: &PropertyBag) -> Self {
        let defaults = Self::default();

        let statement = StatementConfig {
            show_labels: bag.get_bool("statementproperties", "show", defaults.statement.show_labels),
            font_size: bag.get_number("statementproperties", "fontSize", defaults.statement.font_size),
            font_color: bag.get_color_property(
                "statementproperties",
                "defaultFontColor",
                defaults.statement.font_color,
            ),
            label_clip_width: defaults.statement.label_clip_width,
        };

        let sort = SortConfig {
            enabled: bag.get_bool("statementsortproperties", "enabled", defaults.sort.enabled),
            order: bag
                .get_str("statementsortproperties", "statementSortOrderDefault")
                .and_then(SortOrder::from_property)
                .unwrap_or(defaults.sort.order),
        };

        let node = NodeConfig {
            group_color: bag.get_color_property(
                "groupnodeproperties",
                "defaultColor",
                defaults.node.group_color,
            ),
            baseline_color: defaults.node.baseline_color,
        };

        let data_label = DataLabelConfig {
            show: bag.get_bool("groupnodedatalabelproperties", "showLabels", defaults.data_label.show),
            color: bag.get_color_property(
                "groupnodedatalabelproperties",
                "defaultColor",
                defaults.data_label.color,
            ),
            font_size: bag.get_number(
                "groupnodedatalabelproperties",
                "fontSize",
                defaults.data_label.font_size,
            ),
        };

        let legend = LegendConfig {
            font_size_pt: bag.get_number(
                "groupnodelegendproperties",
                "fontSize",
                defaults.legend.font_size_pt,
            ),
            circle_radius: bag.get_number(
                "groupnodelegendproperties",
                "defaultRadius",
                defaults.legend.circle_radius,
            ),
            label_clip_width: defaults.legend.label_clip_width,
        };

        let hover = HoverConfig {
            font_size_pt: bag.get_number("hoverproperties", "fontSize", defaults.hover.font_size_pt),
            header: defaults.hover.header.clone(),
        };

        let gap_bar = GapBarConfig {
            color: bag.get_color_property("gapbarproperties", "defaultColor", defaults.gap_bar.color),
            height: bag.get_number("gapbarproperties", "defaultHeight", defaults.gap_bar.height),
            color_by_statement: bag.get_bool(
                "gapbarproperties",
                "colorByCategory",
                defaults.gap_bar.color_by_statement,
            ),
            improvement_color: defaults.gap_bar.improvement_color,
            regression_color: defaults.gap_bar.regression_color,
        };

        let gap_type = bag
            .get_str("gaptypeproperties", "gapTypeDefault")
            .and_then(GapType::from_property)
            .unwrap_or(defaults.gap_type);

        let gap_label = GapLabelConfig {
            position: bag
                .get_str("gaplabelproperties", "defaultPosition")
                .and_then(GapLabelPosition::from_property)
                .unwrap_or(defaults.gap_label.position),
            color_on_bar: bag.get_color_property(
                "gaplabelproperties",
                "defaultColorOnBar",
                defaults.gap_label.color_on_bar,
            ),
            color_below_bar: bag.get_color_property(
                "gaplabelproperties",
                "defaultColorBelowBar",
                defaults.gap_label.color_below_bar,
            ),
            font_size: bag.get_number("gaplabelproperties", "fontSize", defaults.gap_label.font_size),
        };

        let general = GeneralConfig {
            font_color: bag.get_color_property("general", "defaultColor", defaults.general.font_color),
            font_size: bag.get_number("general", "fontSize", defaults.general.font_size),
            format_string: bag
                .get_str("general", "formatString")
                .filter(|value| !value.trim().is_empty())
                .map(str::to_owned),
        };

        Self {
            statement,
            sort,
            node,
            data_label,
            legend,
            hover,
            gap_bar,
            gap_type,
            gap_label,
            general,
            fonts: defaults.fonts,
            selector_height: defaults.selector_height,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_font_size() -> f64 {
    9.0
}

fn default_hover_font_size() -> f64 {
    10.0
}

fn default_hover_header() -> String {
    "Hover on a circle below to focus in on that group".to_owned()
}

fn default_statement_font_color() -> Color {
    Color::from_rgb8(0x77, 0x77, 0x77)
}

fn default_statement_clip_width() -> f64 {
    100.0
}

fn default_group_node_color() -> Color {
    Color::from_rgb8(0x00, 0x39, 0x4d)
}

fn default_baseline_node_color() -> Color {
    Color::from_rgb8(255, 165, 0)
}

fn default_neutral_color() -> Color {
    Color::from_rgb8(119, 119, 119)
}

fn default_legend_radius() -> f64 {
    8.0
}

fn default_legend_clip_width() -> f64 {
    150.0
}

fn default_gap_bar_color() -> Color {
    Color::from_rgb8(1, 184, 170)
}

fn default_gap_bar_height() -> f64 {
    16.0
}

fn default_improvement_color() -> Color {
    Color::from_rgb8(0, 128, 0)
}

fn default_regression_color() -> Color {
    Color::from_rgb8(255, 0, 0)
}

fn default_color_on_bar() -> Color {
    Color::WHITE
}

fn default_color_below_bar() -> Color {
    Color::from_rgb8(0x48, 0x84, 0xd9)
}

fn default_data_font_family() -> String {
    "wf_standard-font,helvetica,arial,sans-serif".to_owned()
}

fn default_statement_font_family() -> String {
    "'Segoe UI',wf_segoe-ui_normal,helvetica,arial,sans-serif".to_owned()
}

fn default_selector_height() -> f64 {
    24.0
}

#[cfg(test)]
mod tests {
    use super::{GapLabelPosition, GapType, SortOrder};

    #[test]
    fn enum_properties_parse_case_insensitively() {
        assert_eq!(GapType::from_property("Difference"), Some(GapType::Difference));
        assert_eq!(SortOrder::from_property("ASC"), Some(SortOrder::Ascending));
        assert_eq!(GapLabelPosition::from_property("below"), Some(GapLabelPosition::Below));
        assert_eq!(GapType::from_property("ratio"), None);
    }
}
