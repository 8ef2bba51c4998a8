use serde::{Deserialize, Serialize};

/// Optional per-series "extra details" measure shown on hover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailSeries {
    pub display_name: String,
    pub values: Vec<f64>,
}

impl DetailSeries {
    #[must_use]
    pub fn new(display_name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            display_name: display_name.into(),
            values,
        }
    }
}

/// One measure column of a categorical result set.
///
/// `group_name` is the value of the grouping field the column belongs to;
/// the chart needs it to tell the baseline group from the targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSeries {
    #[serde(default)]
    pub group_name: Option<String>,
    pub display_name: String,
    #[serde(default)]
    pub format_string: Option<String>,
    pub values: Vec<f64>,
    #[serde(default)]
    pub details: Option<DetailSeries>,
}

impl ValueSeries {
    #[must_use]
    pub fn new(group_name: impl Into<String>, display_name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            group_name: Some(group_name.into()),
            display_name: display_name.into(),
            format_string: None,
            values,
            details: None,
        }
    }

    /// A series with no grouping annotation.
    #[must_use]
    pub fn ungrouped(display_name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            group_name: None,
            display_name: display_name.into(),
            format_string: None,
            values,
            details: None,
        }
    }

    #[must_use]
    pub fn with_format_string(mut self, format_string: impl Into<String>) -> Self {
        self.format_string = Some(format_string.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: DetailSeries) -> Self {
        self.details = Some(details);
        self
    }

    #[must_use]
    pub fn group_label(&self) -> &str {
        self.group_name.as_deref().unwrap_or_default()
    }
}

/// One categorical result set: category labels plus aligned value series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoricalDataset {
    pub categories: Vec<String>,
    #[serde(default)]
    pub values: Vec<ValueSeries>,
}

impl CategoricalDataset {
    #[must_use]
    pub fn new(categories: Vec<String>, values: Vec<ValueSeries>) -> Self {
        Self { categories, values }
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.values.len()
    }

    /// Global `(min, max)` over every value series; `None` when there are no values.
    #[must_use]
    pub fn value_domain(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .flat_map(|series| series.values.iter().copied())
            .fold(None, |acc, value| match acc {
                None => Some((value, value)),
                Some((min, max)) => Some((min.min(value), max.max(value))),
            })
    }

    /// Category label with the most characters; the first one wins on ties.
    #[must_use]
    pub fn longest_category(&self) -> Option<&str> {
        let mut longest: Option<&str> = None;
        for label in &self.categories {
            match longest {
                Some(current) if current.chars().count() >= label.chars().count() => {}
                _ => longest = Some(label),
            }
        }
        longest
    }

    /// Group names in series order (missing annotations become empty strings).
    #[must_use]
    pub fn group_names(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|series| series.group_label().to_owned())
            .collect()
    }
}

/// Auxiliary ordering series carried by a secondary result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortBySeries {
    pub categories: Vec<String>,
    pub values: Vec<f64>,
}

impl SortBySeries {
    /// Extracts the first value column of a secondary result set.
    #[must_use]
    pub fn from_dataset(dataset: &CategoricalDataset) -> Option<Self> {
        let first = dataset.values.first()?;
        if first.values.is_empty() {
            return None;
        }
        Some(Self {
            categories: dataset.categories.clone(),
            values: first.values.clone(),
        })
    }
}
