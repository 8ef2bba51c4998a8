use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{CategoricalDataset, LinearScale, Viewport};
use crate::error::{GapChartError, GapChartResult};

use super::{FormatInfo, GapChartConfig, LayoutServices};

pub const MAX_LABEL_PADDING_PX: f64 = 15.0;
pub const MIN_LABEL_PADDING_PX: f64 = 0.0;
pub const SCALE_RANGE_PADDING_PX: f64 = 8.0;
pub const MIN_BAR_WIDTH_PX: f64 = 150.0;
pub const DEFAULT_RIGHT_MARGIN_PX: f64 = 15.0;
pub const TOP_MARGIN_PX: f64 = 8.0;
pub const LEFT_TEXT_MARGIN_PX: f64 = 10.0;
pub const ROW_CONTAINER_INSET_PX: f64 = 10.0;
pub const GAP_BETWEEN_BAR_AND_LABEL_PX: f64 = 3.0;
pub const STATEMENT_POSITION_IN_ROW: f64 = 0.4;
pub const BAR_POSITION_IN_ROW: f64 = 0.5;

const ROW_BUFFER_PX: f64 = 10.0;
const VALUE_LABEL_SPACING_PX: f64 = 5.0;

/// Resolved plotting frame for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub viewport: Viewport,
    pub min_value: f64,
    pub max_value: f64,
    /// Width reserved for the widest (max) value label, padding included.
    pub max_label_width: f64,
    pub max_label_height: f64,
    pub min_label_width: f64,
    pub gap_label_height: f64,
    /// Zero when statement labels are hidden.
    pub statement_label_width: f64,
    pub statement_label_height: f64,
    pub circle_radius: f64,
    pub gap_between_bar_and_label: f64,
    pub row_height: f64,
    pub left_text_margin: f64,
    pub row_container_start: f64,
    pub left_margin: f64,
    pub right_margin: f64,
    pub top_margin: f64,
    pub bar_width: f64,
    pub scale: LinearScale,
    pub needs_horizontal_scroll: bool,
    /// Fraction of the row height where the statement label is centered.
    pub statement_position: f64,
    /// Fraction of the row height where the gap bar is centered.
    pub bar_position: f64,
}

impl Frame {
    #[must_use]
    pub fn position_of(&self, value: f64) -> f64 {
        self.scale.map(value)
    }

    /// Same frame with a different right margin; the bar width and scale are
    /// recomputed under the new margin.
    pub fn with_right_margin(self, right_margin: f64) -> GapChartResult<Self> {
        let mut frame = self;
        frame.right_margin = right_margin;
        frame.recompute_bars()?;
        Ok(frame)
    }

    #[must_use]
    pub fn with_bar_position(mut self, bar_position: f64) -> Self {
        self.bar_position = bar_position;
        self
    }

    fn recompute_bars(&mut self) -> GapChartResult<()> {
        let available = self.viewport.width_px()
            - self.left_margin
            - (self.max_label_width + self.right_margin);
        let (bar_width, needs_horizontal_scroll) = clamp_bar_width(available);
        self.bar_width = bar_width;
        self.needs_horizontal_scroll = needs_horizontal_scroll;
        self.scale = LinearScale::new(
            (self.min_value, self.max_value),
            (self.max_label_width + SCALE_RANGE_PADDING_PX, bar_width),
        )?;
        Ok(())
    }
}

/// Applies the bar width floor; returns `(width, horizontal_scroll_needed)`.
#[must_use]
pub fn clamp_bar_width(width: f64) -> (f64, bool) {
    if width < MIN_BAR_WIDTH_PX {
        (MIN_BAR_WIDTH_PX, true)
    } else {
        (width, false)
    }
}

/// Measures labels and derives margins, row height and the shared scale.
pub fn layout_frame(
    dataset: &CategoricalDataset,
    viewport: Viewport,
    format_info: &FormatInfo,
    config: &GapChartConfig,
    services: &LayoutServices,
) -> GapChartResult<Frame> {
    let (min_value, max_value) = dataset
        .value_domain()
        .ok_or_else(|| GapChartError::InvalidData("dataset has no values".to_owned()))?;

    let family = config.fonts.data_family.as_str();
    let format = format_info.format_string.as_str();
    let max_text = services.format(max_value, format);
    let min_text = services.format(min_value, format);

    let max_box = services.measure(family, config.data_label.font_size, &max_text);
    let min_box = services.measure(family, config.data_label.font_size, &min_text);
    let gap_label_box = services.measure(family, config.gap_label.font_size, &max_text);

    let longest = dataset.longest_category().unwrap_or_default();
    let statement_box = services.measure(family, config.statement.font_size, longest);

    let circle_radius = config.gap_bar.height / 2.0;
    let statement_row = statement_box.height + ROW_BUFFER_PX;
    let value_row = (max_box.height + VALUE_LABEL_SPACING_PX)
        + (gap_label_box.height + GAP_BETWEEN_BAR_AND_LABEL_PX)
        + circle_radius * 2.0
        + ROW_BUFFER_PX;
    let row_height = statement_row.max(value_row);

    let statement_label_width = if config.statement.show_labels {
        statement_box.width
    } else {
        0.0
    };
    let mut row_container_start = ROW_CONTAINER_INSET_PX;
    if config.statement.show_labels {
        row_container_start += LEFT_TEXT_MARGIN_PX + statement_label_width;
    }

    let max_label_width = max_box.width + MAX_LABEL_PADDING_PX;
    let min_label_width = min_box.width + MIN_LABEL_PADDING_PX;

    let mut frame = Frame {
        viewport,
        min_value,
        max_value,
        max_label_width,
        max_label_height: max_box.height,
        min_label_width,
        gap_label_height: gap_label_box.height,
        statement_label_width,
        statement_label_height: statement_box.height,
        circle_radius,
        gap_between_bar_and_label: GAP_BETWEEN_BAR_AND_LABEL_PX,
        row_height,
        left_text_margin: LEFT_TEXT_MARGIN_PX,
        row_container_start,
        left_margin: row_container_start + min_label_width,
        right_margin: DEFAULT_RIGHT_MARGIN_PX,
        top_margin: TOP_MARGIN_PX,
        bar_width: 0.0,
        scale: LinearScale::new((min_value, max_value), (0.0, 0.0))?,
        needs_horizontal_scroll: false,
        statement_position: STATEMENT_POSITION_IN_ROW,
        bar_position: BAR_POSITION_IN_ROW,
    };
    frame.recompute_bars()?;

    trace!(
        row_height = frame.row_height,
        left_margin = frame.left_margin,
        bar_width = frame.bar_width,
        horizontal_scroll = frame.needs_horizontal_scroll,
        "frame resolved"
    );
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::{MIN_BAR_WIDTH_PX, clamp_bar_width};

    #[test]
    fn bar_width_floor_sets_scroll_flag() {
        assert_eq!(clamp_bar_width(149.9), (MIN_BAR_WIDTH_PX, true));
        assert_eq!(clamp_bar_width(150.0), (150.0, false));
        assert_eq!(clamp_bar_width(420.0), (420.0, false));
    }
}
