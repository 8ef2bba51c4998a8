use serde::{Deserialize, Serialize};

use super::{Frame, StatementRecord};

/// Vertical placement of one (record, target) comparison row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowPlacement {
    pub record_index: usize,
    pub series_index: usize,
    pub top: f64,
    /// Set on the first row of each record only.
    pub statement_y: Option<f64>,
    pub bar_center_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowLayout {
    pub rows: Vec<RowPlacement>,
    pub content_height: f64,
    pub content_width: f64,
}

#[must_use]
pub fn resolve_row_layout(frame: &Frame, records: &[StatementRecord]) -> RowLayout {
    let mut rows = Vec::new();
    let mut top = 0.0;
    let mut max_x = 0.0_f64;

    for (record_index, record) in records.iter().enumerate() {
        max_x = max_x.max(record.max_x);
        let statement_y = top + frame.row_height * frame.statement_position;
        for (position, target) in record.targets.iter().enumerate() {
            let Some(series_index) = target.series_index() else {
                continue;
            };
            rows.push(RowPlacement {
                record_index,
                series_index,
                top,
                statement_y: (position == 0).then_some(statement_y),
                bar_center_y: top + frame.row_height * frame.bar_position,
            });
            top += frame.row_height;
        }
    }

    RowLayout {
        rows,
        content_height: top,
        content_width: max_x + frame.max_label_width + frame.right_margin,
    }
}
