use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CategoricalDataset, Color};

use super::{ChartMetadata, FormatInfo, Frame, GapType, LayoutServices, NodeRole};

/// Sign of a gap; drives the bar color in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapTrend {
    Improvement,
    Regression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapMeasure {
    pub value: f64,
    pub formatted: String,
    pub trend: GapTrend,
}

/// One (category, series) value placed on the shared scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpinionNode {
    pub role: NodeRole,
    pub group_label: String,
    pub value: f64,
    pub formatted_value: String,
    pub detail_value: String,
    pub detail_label: String,
    pub x: f64,
}

impl OpinionNode {
    #[must_use]
    pub fn is_baseline(&self) -> bool {
        self.role.is_baseline()
    }

    /// Hover text shown when the node is focused.
    #[must_use]
    pub fn detail_text(&self) -> String {
        format!("{}: {}", self.detail_label, self.detail_value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetNode {
    pub node: OpinionNode,
    /// `None` for a lift against a zero baseline.
    pub gap: Option<GapMeasure>,
}

impl TargetNode {
    #[must_use]
    pub fn series_index(&self) -> Option<usize> {
        self.node.role.series_index()
    }
}

/// One category's baseline and target nodes for a single pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementRecord {
    pub category_index: usize,
    pub statement: String,
    pub baseline: OpinionNode,
    pub targets: Vec<TargetNode>,
    pub color: Color,
    pub min_x: f64,
    pub max_x: f64,
}

impl StatementRecord {
    #[must_use]
    pub fn target_for_series(&self, series_index: usize) -> Option<&TargetNode> {
        self.targets
            .iter()
            .find(|target| target.series_index() == Some(series_index))
    }

    /// Baseline first, then targets in series order.
    pub fn nodes(&self) -> impl Iterator<Item = &OpinionNode> {
        std::iter::once(&self.baseline).chain(self.targets.iter().map(|target| &target.node))
    }
}

/// `target / baseline - 1` for lift, `target - baseline` for difference.
#[must_use]
pub fn compute_gap(baseline: f64, target: f64, gap_type: GapType) -> Option<f64> {
    match gap_type {
        GapType::Lift if baseline == 0.0 => None,
        GapType::Lift => Some(target / baseline - 1.0),
        GapType::Difference => Some(target - baseline),
    }
}

/// Builds the record for `category_index`.
///
/// Callers pass a dataset already accepted by the converter, so every series
/// is aligned with the categories.
#[must_use]
pub fn extract_record(
    dataset: &CategoricalDataset,
    frame: &Frame,
    format_info: &FormatInfo,
    metadata: &ChartMetadata,
    services: &LayoutServices,
    category_index: usize,
) -> StatementRecord {
    let format = format_info.format_string.as_str();
    let build_node = |series_index: usize, role: NodeRole, group_label: &str| {
        let series = &dataset.values[series_index];
        let value = series.values[category_index];
        let (detail_value, detail_label) = match &series.details {
            Some(details) => (
                services.format(details.values[category_index], format),
                details.display_name.clone(),
            ),
            None => (services.format(value, format), series.display_name.clone()),
        };
        OpinionNode {
            role,
            group_label: group_label.to_owned(),
            value,
            formatted_value: services.format(value, format),
            detail_value,
            detail_label,
            x: frame.position_of(value),
        }
    };

    let baseline = build_node(
        format_info.baseline_index,
        NodeRole::Baseline,
        &metadata.baseline.label,
    );

    let targets: Vec<TargetNode> = metadata
        .targets
        .iter()
        .filter_map(|group| {
            let series_index = group.role.series_index()?;
            let node = build_node(series_index, group.role, &group.label);
            let gap = compute_gap(baseline.value, node.value, metadata.gap_type).map(|value| {
                GapMeasure {
                    value,
                    formatted: services.format(value, format),
                    trend: if value < 0.0 {
                        GapTrend::Regression
                    } else {
                        GapTrend::Improvement
                    },
                }
            });
            Some(TargetNode { node, gap })
        })
        .collect();

    let positions: SmallVec<[f64; 8]> = std::iter::once(baseline.x)
        .chain(targets.iter().map(|target| target.node.x))
        .collect();
    let min_x = positions.iter().copied().fold(f64::INFINITY, f64::min);
    let max_x = positions.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    StatementRecord {
        category_index,
        statement: dataset.categories[category_index].clone(),
        baseline,
        targets,
        color: services.palette().color_by_index(category_index),
        min_x,
        max_x,
    }
}

/// One record per category, in category order.
#[must_use]
pub fn extract_records(
    dataset: &CategoricalDataset,
    frame: &Frame,
    format_info: &FormatInfo,
    metadata: &ChartMetadata,
    services: &LayoutServices,
) -> Vec<StatementRecord> {
    (0..dataset.category_count())
        .map(|index| extract_record(dataset, frame, format_info, metadata, services, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::compute_gap;
    use crate::api::GapType;

    #[test]
    fn gap_sign_follows_gap_type() {
        assert_eq!(compute_gap(10.0, 8.0, GapType::Difference), Some(-2.0));
        assert_relative_eq!(
            compute_gap(10.0, 8.0, GapType::Lift).expect("lift"),
            -0.2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn lift_against_zero_baseline_has_no_gap() {
        assert_eq!(compute_gap(0.0, 5.0, GapType::Lift), None);
        assert_eq!(compute_gap(0.0, 5.0, GapType::Difference), Some(5.0));
    }
}
