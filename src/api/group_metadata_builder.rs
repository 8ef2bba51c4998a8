use serde::{Deserialize, Serialize};

use crate::core::{Color, ColorPalette};

use super::{FormatInfo, GapChartConfig, GapType};

/// Which side of the comparison a series (or a node built from it) is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeRole {
    Baseline,
    /// Carries the index of the value series the target came from.
    Target(usize),
}

impl NodeRole {
    #[must_use]
    pub fn is_baseline(self) -> bool {
        matches!(self, Self::Baseline)
    }

    #[must_use]
    pub fn series_index(self) -> Option<usize> {
        match self {
            Self::Baseline => None,
            Self::Target(index) => Some(index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMetadata {
    pub role: NodeRole,
    pub label: String,
    pub color: Color,
}

/// Baseline group plus one entry per target series, in series order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub baseline: GroupMetadata,
    pub targets: Vec<GroupMetadata>,
    pub gap_type: GapType,
}

impl ChartMetadata {
    #[must_use]
    pub fn target_for_series(&self, series_index: usize) -> Option<&GroupMetadata> {
        self.targets
            .iter()
            .find(|group| group.role == NodeRole::Target(series_index))
    }

    #[must_use]
    pub fn group(&self, role: NodeRole) -> Option<&GroupMetadata> {
        match role {
            NodeRole::Baseline => Some(&self.baseline),
            NodeRole::Target(index) => self.target_for_series(index),
        }
    }
}

/// Target colors come from the palette by series index, so a group keeps its
/// color when another group becomes the baseline.
#[must_use]
pub fn build_group_metadata(
    format_info: &FormatInfo,
    config: &GapChartConfig,
    palette: &dyn ColorPalette,
) -> ChartMetadata {
    let baseline = GroupMetadata {
        role: NodeRole::Baseline,
        label: format_info.baseline_group().to_owned(),
        color: config.node.baseline_color,
    };
    let targets = format_info
        .target_indices()
        .map(|series_index| GroupMetadata {
            role: NodeRole::Target(series_index),
            label: format_info.group_names[series_index].clone(),
            color: palette.color_by_index(series_index),
        })
        .collect();

    ChartMetadata {
        baseline,
        targets,
        gap_type: config.gap_type,
    }
}
