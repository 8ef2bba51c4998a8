use tracing::{debug, warn};

use crate::core::{CategoricalDataset, SortBySeries};

use super::{GapChartConfig, sort_dataset};

/// Normalized, validated input for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GapViewModel {
    dataset: CategoricalDataset,
    sorted: bool,
}

impl GapViewModel {
    #[must_use]
    pub fn dataset(&self) -> &CategoricalDataset {
        &self.dataset
    }

    #[must_use]
    pub fn into_dataset(self) -> CategoricalDataset {
        self.dataset
    }

    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.dataset.category_count()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.dataset.series_count()
    }

    /// Only a baseline: nothing to compare against.
    #[must_use]
    pub fn is_single_series(&self) -> bool {
        self.dataset.series_count() < 2
    }

    #[must_use]
    pub fn group_names(&self) -> Vec<String> {
        self.dataset.group_names()
    }
}

/// Why a result set was turned away. Rejections are an expected outcome and
/// end the pass with nothing drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionRejection {
    NoResultSets,
    NoCategories,
    NoValueSeries,
    MissingGroupName,
    LengthMismatch,
    NonFiniteValue,
}

/// Validates the host result sets and builds the pass view-model.
///
/// `result_sets[0]` is the primary dataset; `result_sets[1]`, when present,
/// carries the optional sort-by series.
#[must_use]
pub fn convert_dataset(
    result_sets: &[CategoricalDataset],
    config: &GapChartConfig,
) -> Option<GapViewModel> {
    match try_convert(result_sets, config) {
        Ok(view_model) => Some(view_model),
        Err(reason) => {
            warn!(?reason, "dataset rejected; nothing will be rendered");
            None
        }
    }
}

fn try_convert(
    result_sets: &[CategoricalDataset],
    config: &GapChartConfig,
) -> Result<GapViewModel, ConversionRejection> {
    let primary = result_sets.first().ok_or(ConversionRejection::NoResultSets)?;
    check_primary(primary)?;

    if !config.sort.enabled {
        return Ok(GapViewModel {
            dataset: primary.clone(),
            sorted: false,
        });
    }

    let sort_by = result_sets.get(1).and_then(SortBySeries::from_dataset);
    let dataset = sort_dataset(primary, sort_by.as_ref(), config.sort.order);
    debug!(
        categories = dataset.category_count(),
        with_sort_by = sort_by.is_some(),
        "dataset sorted"
    );
    Ok(GapViewModel {
        dataset,
        sorted: true,
    })
}

/// Classifies a primary dataset the converter would refuse.
pub fn check_primary(dataset: &CategoricalDataset) -> Result<(), ConversionRejection> {
    let first = dataset
        .values
        .first()
        .ok_or(ConversionRejection::NoValueSeries)?;
    if first.group_name.is_none() {
        return Err(ConversionRejection::MissingGroupName);
    }
    if dataset.categories.is_empty() {
        return Err(ConversionRejection::NoCategories);
    }

    let category_count = dataset.category_count();
    for series in &dataset.values {
        if series.values.len() != category_count {
            return Err(ConversionRejection::LengthMismatch);
        }
        if series.values.iter().any(|value| !value.is_finite()) {
            return Err(ConversionRejection::NonFiniteValue);
        }
        if let Some(details) = &series.details {
            if details.values.len() != category_count {
                return Err(ConversionRejection::LengthMismatch);
            }
            if details.values.iter().any(|value| !value.is_finite()) {
                return Err(ConversionRejection::NonFiniteValue);
            }
        }
    }
    Ok(())
}
