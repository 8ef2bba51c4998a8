use crate::core::{Color, ellipsize_to_width, point_to_px};
use crate::render::{
    CirclePrimitive, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::{
    GapLabelPosition, GapLayout, GapTrend, LayoutServices, OpinionNode, RowPlacement,
    StatementRecord, TargetNode,
};

const NODE_LABEL_OFFSET_PX: f64 = 4.0;
const NODE_RADIUS_GROWTH: f64 = 0.4;
const GAP_LABEL_ON_BAR_NUDGE_PX: f64 = 3.0;
const SEPARATOR_STROKE_PX: f64 = 1.0;

/// Translates a resolved layout into draw commands.
///
/// Regions are stacked top to bottom (selector, legend + hover, opinions) and
/// every primitive is emitted in absolute viewport coordinates. No layout value
/// is recomputed here; only label widths are measured to place text.
#[must_use]
pub fn build_gap_scene(layout: &GapLayout, services: &LayoutServices) -> RenderFrame {
    let mut scene = SceneWriter {
        layout,
        services,
        frame: RenderFrame::new(layout.frame.viewport),
    };
    scene.push_legend();
    scene.push_hover();
    scene.push_separator();
    scene.push_rows();
    scene.frame
}

struct SceneWriter<'a> {
    layout: &'a GapLayout,
    services: &'a LayoutServices,
    frame: RenderFrame,
}

impl SceneWriter<'_> {
    fn legend_origin_y(&self) -> f64 {
        self.layout.containers.heights.selector
    }

    fn opinion_origin_y(&self) -> f64 {
        self.layout.containers.heights.selector + self.layout.containers.heights.legend_and_hover
    }

    fn rows_origin_x(&self) -> f64 {
        self.layout.containers.series_column_width
    }

    fn push_text(&mut self, text: TextPrimitive) {
        if !text.text.is_empty() {
            self.frame.texts.push(text);
        }
    }

    fn push_legend(&mut self) {
        let layout = self.layout;
        let legend = &layout.legend;
        let origin_y = self.legend_origin_y();
        let family = &layout.config.fonts.data_family;
        let color = layout.config.general.font_color;

        for item in legend.items() {
            self.frame.circles.push(CirclePrimitive::new(
                item.circle_x,
                origin_y + item.circle_y,
                item.radius,
                item.color,
                item.color,
            ));
            self.push_text(
                TextPrimitive::new(
                    item.label.clone(),
                    item.label_x,
                    origin_y + item.label_y,
                    legend.font_size_px,
                    color,
                    TextHAlign::Left,
                )
                .with_font_family(family.clone()),
            );
        }
    }

    fn push_hover(&mut self) {
        let layout = self.layout;
        let hover = &layout.hover;
        let origin_y = self.legend_origin_y();
        let color = layout.config.general.font_color;
        let family = &layout.config.fonts.data_family;

        for (index, line) in hover.lines.iter().enumerate() {
            self.push_text(
                TextPrimitive::new(
                    line.clone(),
                    hover.x,
                    origin_y + hover.y + hover.line_height * index as f64,
                    hover.font_size_px,
                    color,
                    TextHAlign::Left,
                )
                .with_font_family(family.clone()),
            );
        }
    }

    fn push_separator(&mut self) {
        let layout = self.layout;
        let frame = &layout.frame;
        let y = self.opinion_origin_y();
        let x1 = frame.left_text_margin;
        let x2 = frame.left_text_margin + frame.left_margin + frame.bar_width;
        self.frame.lines.push(LinePrimitive::new(
            x1,
            y,
            x2,
            y,
            SEPARATOR_STROKE_PX,
            layout.metadata.baseline.color,
        ));
    }

    fn push_rows(&mut self) {
        let layout = self.layout;
        for row in &layout.rows.rows {
            let Some(record) = layout.records.get(row.record_index) else {
                continue;
            };
            let Some(target) = record.target_for_series(row.series_index) else {
                continue;
            };
            if let Some(statement_y) = row.statement_y {
                self.push_statement(record, statement_y);
            }
            self.push_comparison(record, target, row);
        }
    }

    fn push_statement(&mut self, record: &StatementRecord, statement_y: f64) {
        let layout = self.layout;
        let config = &layout.config;
        if !config.statement.show_labels {
            return;
        }
        let family = config.fonts.statement_family.as_str();
        let font_size_px = point_to_px(config.statement.font_size);
        let height = self
            .services
            .measure(family, font_size_px, &record.statement)
            .height;
        let text = ellipsize_to_width(
            self.services.measurer(),
            family,
            font_size_px,
            &record.statement,
            config.statement.label_clip_width,
        );
        self.push_text(
            TextPrimitive::new(
                text,
                layout.frame.left_text_margin,
                self.opinion_origin_y() + statement_y + height / 4.0,
                font_size_px,
                config.statement.font_color,
                TextHAlign::Left,
            )
            .with_font_family(family),
        );
    }

    fn push_comparison(&mut self, record: &StatementRecord, target: &TargetNode, row: &RowPlacement) {
        let center_y = self.opinion_origin_y() + row.bar_center_y;
        let baseline = &record.baseline;
        let min_x = baseline.x.min(target.node.x);

        self.push_gap_bar(record, target, center_y);

        let baseline_color = self.layout.metadata.baseline.color;
        let target_color = target
            .node
            .role
            .series_index()
            .and_then(|index| self.layout.metadata.target_for_series(index))
            .map_or(self.layout.config.node.group_color, |group| group.color);
        self.push_node(baseline, baseline_color, center_y, min_x);
        self.push_node(&target.node, target_color, center_y, min_x);
    }

    fn push_gap_bar(&mut self, record: &StatementRecord, target: &TargetNode, center_y: f64) {
        let layout = self.layout;
        let config = &layout.config;
        let frame = &layout.frame;
        let radius = frame.circle_radius;
        let offset_x = self.rows_origin_x();

        let rect_x = record.baseline.x.min(target.node.x);
        let rect_width = (target.node.x - record.baseline.x).abs();
        let fill = if config.gap_bar.color_by_statement {
            record.color
        } else {
            match target.gap.as_ref().map(|gap| gap.trend) {
                Some(GapTrend::Regression) => config.gap_bar.regression_color,
                Some(GapTrend::Improvement) => config.gap_bar.improvement_color,
                None => config.gap_bar.color,
            }
        };
        let rect_top = center_y - radius;
        let rect_height = radius * 2.0;
        self.frame.rects.push(RectPrimitive::new(
            offset_x + rect_x,
            rect_top,
            rect_width,
            rect_height,
            fill,
        ));

        let Some(gap) = &target.gap else {
            return;
        };
        let family = config.fonts.data_family.as_str();
        let font_size_px = point_to_px(config.gap_label.font_size);
        let label_box = self.services.measure(family, font_size_px, &gap.formatted);

        let below = config.gap_label.position == GapLabelPosition::Below
            || rect_width - radius * 2.0 < label_box.width
            || label_box.height > radius * 2.0;
        let (y, color) = if below {
            (
                rect_top + rect_height + label_box.height + frame.gap_between_bar_and_label,
                config.gap_label.color_below_bar,
            )
        } else {
            (
                center_y + label_box.height / 2.0 - GAP_LABEL_ON_BAR_NUDGE_PX,
                config.gap_label.color_on_bar,
            )
        };
        self.push_text(
            TextPrimitive::new(
                gap.formatted.clone(),
                offset_x + rect_x + rect_width / 2.0,
                y,
                font_size_px,
                color,
                TextHAlign::Center,
            )
            .with_font_family(family),
        );
    }

    fn push_node(&mut self, node: &OpinionNode, color: Color, center_y: f64, min_x: f64) {
        let layout = self.layout;
        let config = &layout.config;
        let base_radius = layout.frame.circle_radius;
        let radius = node_radius(base_radius, node.x, min_x);
        let offset_x = self.rows_origin_x();

        self.frame.circles.push(CirclePrimitive::new(
            offset_x + node.x,
            center_y,
            radius,
            color,
            color,
        ));

        if !config.data_label.show {
            return;
        }
        let family = config.fonts.data_family.as_str();
        let label_box = self
            .services
            .measure(family, config.data_label.font_size, &node.formatted_value);
        let on_left = node.x == min_x;
        let x = if on_left {
            node.x - label_box.width - radius - NODE_LABEL_OFFSET_PX
        } else {
            node.x + radius + NODE_LABEL_OFFSET_PX
        };
        self.push_text(
            TextPrimitive::new(
                node.formatted_value.clone(),
                offset_x + x,
                center_y + label_box.height / 4.0,
                config.data_label.font_size,
                config.data_label.color,
                TextHAlign::Left,
            )
            .with_font_family(family),
        );
    }
}

/// Circles grow logarithmically with their distance from the leftmost node
/// of the comparison.
#[must_use]
pub fn node_radius(base_radius: f64, x: f64, min_x: f64) -> f64 {
    if x <= 0.0 || min_x <= 0.0 {
        return base_radius;
    }
    let grown = base_radius + base_radius * (x / min_x).ln() * NODE_RADIUS_GROWTH;
    if grown.is_finite() && grown > 0.0 {
        grown
    } else {
        base_radius
    }
}
