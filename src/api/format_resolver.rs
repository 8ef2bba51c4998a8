use serde::{Deserialize, Serialize};

use crate::core::{CategoricalDataset, DEFAULT_FORMAT_STRING};

/// Baseline split and display format for one dataset + baseline selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatInfo {
    pub baseline_index: usize,
    /// First series that is not the baseline, if any.
    pub first_target_index: Option<usize>,
    pub format_string: String,
    pub group_names: Vec<String>,
}

impl FormatInfo {
    #[must_use]
    pub fn baseline_group(&self) -> &str {
        self.group_names
            .get(self.baseline_index)
            .map_or("", String::as_str)
    }

    #[must_use]
    pub fn is_baseline(&self, series_index: usize) -> bool {
        series_index == self.baseline_index
    }

    /// Series indices other than the baseline, in series order.
    pub fn target_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.group_names.len()).filter(move |&index| index != self.baseline_index)
    }
}

/// Picks the baseline series and the display format string.
///
/// The baseline is the first series whose group matches `selected_group`,
/// falling back to series 0. The format string comes from the baseline series,
/// then `fallback_format`, then the general format.
#[must_use]
pub fn resolve_format_info(
    dataset: &CategoricalDataset,
    selected_group: Option<&str>,
    fallback_format: Option<&str>,
) -> FormatInfo {
    let group_names = dataset.group_names();
    let baseline_index = selected_group
        .and_then(|selected| group_names.iter().position(|name| name == selected))
        .unwrap_or(0);
    let first_target_index = (0..group_names.len()).find(|&index| index != baseline_index);

    let format_string = dataset
        .values
        .get(baseline_index)
        .and_then(|series| series.format_string.as_deref())
        .filter(|format| !format.trim().is_empty())
        .or_else(|| fallback_format.filter(|format| !format.trim().is_empty()))
        .unwrap_or(DEFAULT_FORMAT_STRING)
        .to_owned();

    FormatInfo {
        baseline_index,
        first_target_index,
        format_string,
        group_names,
    }
}
