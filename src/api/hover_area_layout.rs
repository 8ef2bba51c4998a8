use serde::{Deserialize, Serialize};

use crate::core::{point_to_px, wrap_to_width};

use super::{Frame, GapChartConfig, LayoutServices, LegendModel, OpinionNode};

const HOVER_LINE_SPACING_PX: f64 = 5.0;
const HOVER_HEIGHT_PADDING_PX: f64 = 8.0;
const HOVER_OFFSET_BELOW_LEGEND_PX: f64 = 18.0;

/// Wrapped hover text block placed under the legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverArea {
    pub lines: Vec<String>,
    pub x: f64,
    pub y: f64,
    pub max_width: f64,
    pub font_size_px: f64,
    pub line_height: f64,
    pub height: f64,
}

/// Lays out `text` in the hover slot.
#[must_use]
pub fn layout_hover_text(
    text: &str,
    frame: &Frame,
    legend: &LegendModel,
    config: &GapChartConfig,
    services: &LayoutServices,
) -> HoverArea {
    let font_size_px = point_to_px(config.hover.font_size_pt);
    let max_width = frame.viewport.width_px() - frame.right_margin;
    let lines = wrap_to_width(
        services.measurer(),
        &config.fonts.data_family,
        font_size_px,
        text,
        max_width,
    );
    let line_height = font_size_px + HOVER_LINE_SPACING_PX;
    let text_height = line_height * lines.len().max(1) as f64;

    HoverArea {
        lines,
        x: frame.left_text_margin,
        y: frame.top_margin + legend.height + HOVER_OFFSET_BELOW_LEGEND_PX,
        max_width,
        font_size_px,
        line_height,
        height: text_height + HOVER_HEIGHT_PADDING_PX,
    }
}

/// Hover slot showing the default header.
#[must_use]
pub fn layout_hover_area(
    frame: &Frame,
    legend: &LegendModel,
    config: &GapChartConfig,
    services: &LayoutServices,
) -> HoverArea {
    layout_hover_text(&config.hover.header, frame, legend, config, services)
}

/// Hover slot showing the detail of a focused node.
#[must_use]
pub fn layout_node_focus(
    node: &OpinionNode,
    frame: &Frame,
    legend: &LegendModel,
    config: &GapChartConfig,
    services: &LayoutServices,
) -> HoverArea {
    layout_hover_text(&node.detail_text(), frame, legend, config, services)
}
