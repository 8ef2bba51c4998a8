use serde::{Deserialize, Serialize};

use super::{Frame, GapChartConfig, HoverArea, LegendModel, ScrollState};

/// Heights of the three stacked regions: selector, legend + hover, opinions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerHeights {
    pub selector: f64,
    pub legend_and_hover: f64,
    /// Space left for rows; this is what the scroll policy compares against.
    pub opinion: f64,
}

#[must_use]
pub fn resolve_container_heights(
    frame: &Frame,
    legend: &LegendModel,
    hover: &HoverArea,
    config: &GapChartConfig,
) -> ContainerHeights {
    let selector = frame.top_margin + config.selector_height;
    let legend_and_hover = frame.top_margin + legend.height + hover.height;
    let opinion = (frame.viewport.height_px() - legend_and_hover - selector).max(0.0);
    ContainerHeights {
        selector,
        legend_and_hover,
        opinion,
    }
}

/// Final container geometry once scrolling has been decided.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerLayout {
    pub heights: ContainerHeights,
    pub series_column_width: f64,
    pub rows_column_width: f64,
}

#[must_use]
pub fn resolve_container_layout(
    frame: &Frame,
    heights: ContainerHeights,
    scroll: &ScrollState,
) -> ContainerLayout {
    let rows_column_width = scroll.rows_container_width.unwrap_or_else(|| {
        (frame.viewport.width_px() - frame.row_container_start - frame.right_margin).max(0.0)
    });
    ContainerLayout {
        heights,
        series_column_width: frame.row_container_start,
        rows_column_width,
    }
}
