use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GapChartResult;

use super::Frame;

pub const SCROLL_RIGHT_MARGIN_PX: f64 = 45.0;
pub const SCROLLED_BAR_POSITION_IN_ROW: f64 = 0.3;
pub const SCROLLED_ROWS_CONTAINER_WIDTH_PX: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    pub vertical: bool,
    pub horizontal: bool,
    pub content_height: f64,
    pub available_height: f64,
    pub right_margin: f64,
    /// Fixed rows container width while horizontal scrolling is on.
    pub rows_container_width: Option<f64>,
}

/// Height every row would need: row height x categories x series.
#[must_use]
pub fn content_height(frame: &Frame, category_count: usize, series_count: usize) -> f64 {
    frame.row_height * category_count as f64 * series_count as f64
}

/// Decides scrolling and returns the frame adjusted for it.
///
/// Vertical scrolling widens the right margin and recomputes the bar scale;
/// the horizontal flag is read from the frame after that recomputation.
pub fn apply_scroll_policy(
    frame: Frame,
    content_height: f64,
    available_height: f64,
) -> GapChartResult<(Frame, ScrollState)> {
    let vertical = content_height > available_height;
    let mut frame = if vertical {
        frame.with_right_margin(SCROLL_RIGHT_MARGIN_PX)?
    } else {
        frame
    };

    let horizontal = frame.needs_horizontal_scroll;
    let rows_container_width = if horizontal {
        frame = frame.with_bar_position(SCROLLED_BAR_POSITION_IN_ROW);
        Some(SCROLLED_ROWS_CONTAINER_WIDTH_PX)
    } else {
        None
    };

    debug!(
        vertical,
        horizontal,
        content_height,
        available_height,
        "scroll policy applied"
    );

    Ok((
        frame,
        ScrollState {
            vertical,
            horizontal,
            content_height,
            available_height,
            right_margin: frame.right_margin,
            rows_container_width,
        },
    ))
}
