use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Color, ellipsize_to_width, point_to_px};

use super::{ChartMetadata, Frame, GapChartConfig, GroupMetadata, LayoutServices, NodeRole};

pub const LEGEND_INITIAL_OFFSET_PX: f64 = 15.0;
pub const LEGEND_TEXT_PADDING_PX: f64 = 3.0;
pub const LEGEND_GROUP_GAP_PX: f64 = 15.0;
pub const LEGEND_LINE_ADVANCE_PX: f64 = 18.0;

/// One placed legend entry: a colored circle followed by its group label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendItem {
    pub role: NodeRole,
    pub label: String,
    pub full_label: String,
    pub color: Color,
    pub circle_x: f64,
    pub circle_y: f64,
    pub radius: f64,
    pub label_x: f64,
    pub label_y: f64,
    pub label_width: f64,
    pub text_height: f64,
    /// Horizontal advance consumed by the item.
    pub width: f64,
}

impl LegendItem {
    #[must_use]
    pub fn end_x(&self) -> f64 {
        self.label_x + self.width
    }

    fn translated(mut self, dx: f64) -> Self {
        self.circle_x += dx;
        self.label_x += dx;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendModel {
    pub baseline: LegendItem,
    pub targets: Vec<LegendItem>,
    pub font_size_px: f64,
    pub total_width: f64,
    pub translate_x: f64,
    pub height: f64,
}

impl LegendModel {
    pub fn items(&self) -> impl Iterator<Item = &LegendItem> {
        std::iter::once(&self.baseline).chain(self.targets.iter())
    }

    #[must_use]
    pub fn item(&self, role: NodeRole) -> Option<&LegendItem> {
        self.items().find(|item| item.role == role)
    }
}

struct LegendCursor<'a> {
    services: &'a LayoutServices,
    family: &'a str,
    font_size_px: f64,
    radius: f64,
    clip_width: f64,
    x: f64,
    y: f64,
}

impl LegendCursor<'_> {
    fn place(&mut self, group: &GroupMetadata) -> LegendItem {
        let circle_x = self.x;
        let label_x = circle_x + self.radius + LEGEND_TEXT_PADDING_PX;

        let full_box = self
            .services
            .measure(self.family, self.font_size_px, &group.label);
        let label = ellipsize_to_width(
            self.services.measurer(),
            self.family,
            self.font_size_px,
            &group.label,
            self.clip_width,
        );
        let label_width = self
            .services
            .measure(self.family, self.font_size_px, &label)
            .width;

        let circle_y = self.y + self.radius;
        let width = label_width + LEGEND_GROUP_GAP_PX + self.radius;
        self.x = label_x + width;

        LegendItem {
            role: group.role,
            label,
            full_label: group.label.clone(),
            color: group.color,
            circle_x,
            circle_y,
            radius: self.radius,
            label_x,
            label_y: circle_y + full_box.height / 4.0,
            label_width,
            text_height: full_box.height,
            width,
        }
    }
}

/// Places the baseline item then each target left to right, wrapping onto a
/// new line when the cursor plus the previous item's width passes the
/// viewport edge, then shifts everything so the legend is centered.
#[must_use]
pub fn layout_legend(
    frame: &Frame,
    metadata: &ChartMetadata,
    config: &GapChartConfig,
    services: &LayoutServices,
) -> LegendModel {
    let viewport_width = frame.viewport.width_px();
    let font_size_px = point_to_px(config.legend.font_size_pt);
    let radius = config.legend.circle_radius;

    let mut cursor = LegendCursor {
        services,
        family: &config.fonts.data_family,
        font_size_px,
        radius,
        clip_width: config.legend.label_clip_width,
        x: LEGEND_INITIAL_OFFSET_PX,
        y: frame.top_margin,
    };

    let baseline = cursor.place(&metadata.baseline);
    let mut previous_width = baseline.width;
    let mut targets = Vec::with_capacity(metadata.targets.len());
    for group in &metadata.targets {
        if cursor.x + previous_width > viewport_width {
            cursor.x = LEGEND_INITIAL_OFFSET_PX;
            cursor.y += LEGEND_LINE_ADVANCE_PX;
        }
        let item = cursor.place(group);
        previous_width = item.width;
        targets.push(item);
    }

    let max_end = targets
        .iter()
        .map(LegendItem::end_x)
        .fold(baseline.end_x(), f64::max);
    let total_width = max_end - LEGEND_INITIAL_OFFSET_PX;
    let translate_x = viewport_width / 2.0 - total_width / 2.0 - LEGEND_INITIAL_OFFSET_PX;

    let line_height = (baseline.text_height + LEGEND_TEXT_PADDING_PX)
        .max(radius * 2.0 + LEGEND_TEXT_PADDING_PX);
    let height = line_height + (cursor.y - frame.top_margin);

    trace!(
        items = targets.len() + 1,
        total_width,
        translate_x,
        height,
        "legend placed"
    );

    LegendModel {
        baseline: baseline.translated(translate_x),
        targets: targets
            .into_iter()
            .map(|item| item.translated(translate_x))
            .collect(),
        font_size_px,
        total_width,
        translate_x,
        height,
    }
}
