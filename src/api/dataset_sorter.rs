use ordered_float::OrderedFloat;
use tracing::{debug, warn};

use crate::core::{CategoricalDataset, DetailSeries, SortBySeries, ValueSeries};

use super::SortOrder;

/// Category ordering source chosen for one sort pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortSource {
    SortBy,
    Labels,
}

/// Computes the category permutation: `result[i]` is the original index of the
/// category that ends up at position `i`.
///
/// A sort-by series is used when its values are non-empty and aligned with the
/// primary categories; otherwise labels are compared lexicographically. Ties
/// keep their original relative order in both directions.
#[must_use]
pub fn resolve_sort_permutation(
    dataset: &CategoricalDataset,
    sort_by: Option<&SortBySeries>,
    order: SortOrder,
) -> (Vec<usize>, SortSource) {
    if let Some(sort_by) = sort_by.filter(|series| is_usable_sort_by(dataset, series)) {
        return (sort_by_permutation(dataset, sort_by, order), SortSource::SortBy);
    }

    let mut indices: Vec<usize> = (0..dataset.categories.len()).collect();
    indices.sort_by(|&a, &b| {
        let ordering = dataset.categories[a].cmp(&dataset.categories[b]);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    (indices, SortSource::Labels)
}

fn is_usable_sort_by(dataset: &CategoricalDataset, sort_by: &SortBySeries) -> bool {
    !sort_by.values.is_empty()
        && sort_by.values.len() == dataset.categories.len()
        && sort_by.categories.len() == sort_by.values.len()
}

fn sort_by_permutation(
    dataset: &CategoricalDataset,
    sort_by: &SortBySeries,
    order: SortOrder,
) -> Vec<usize> {
    let mut keyed: Vec<(OrderedFloat<f64>, usize)> = sort_by
        .categories
        .iter()
        .zip(&sort_by.values)
        .map(|(label, &value)| {
            let original_index = dataset
                .categories
                .iter()
                .position(|candidate| candidate == label)
                .unwrap_or_else(|| {
                    warn!(label = %label, "sort-by category not found in primary categories; using index 0");
                    0
                });
            (OrderedFloat(value), original_index)
        })
        .collect();

    keyed.sort_by(|a, b| match order {
        SortOrder::Ascending => a.0.cmp(&b.0),
        SortOrder::Descending => b.0.cmp(&a.0),
    });
    keyed.into_iter().map(|(_, index)| index).collect()
}

/// Returns a reordered copy of `dataset`.
///
/// Category labels, every value series and every detail series are permuted
/// together so index alignment survives the sort.
#[must_use]
pub fn sort_dataset(
    dataset: &CategoricalDataset,
    sort_by: Option<&SortBySeries>,
    order: SortOrder,
) -> CategoricalDataset {
    let (permutation, source) = resolve_sort_permutation(dataset, sort_by, order);
    debug!(
        categories = permutation.len(),
        ?source,
        ?order,
        "applying statement sort"
    );

    let categories = permutation
        .iter()
        .map(|&index| dataset.categories[index].clone())
        .collect();
    let values = dataset
        .values
        .iter()
        .map(|series| permute_series(series, &permutation))
        .collect();

    CategoricalDataset { categories, values }
}

fn permute_series(series: &ValueSeries, permutation: &[usize]) -> ValueSeries {
    ValueSeries {
        group_name: series.group_name.clone(),
        display_name: series.display_name.clone(),
        format_string: series.format_string.clone(),
        values: permute_values(&series.values, permutation),
        details: series.details.as_ref().map(|details| DetailSeries {
            display_name: details.display_name.clone(),
            values: permute_values(&details.values, permutation),
        }),
    }
}

fn permute_values(values: &[f64], permutation: &[usize]) -> Vec<f64> {
    permutation
        .iter()
        .filter_map(|&index| values.get(index).copied())
        .collect()
}
