use serde::{Deserialize, Serialize};
use tracing::debug;

const OPTION_TEXT_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineOption {
    pub value: String,
    pub text: String,
}

/// Baseline picker state; the only thing that survives between passes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BaselineSelector {
    selected: Option<String>,
    groups: Vec<String>,
    options: Vec<BaselineOption>,
    generation: u64,
}

impl BaselineSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn options(&self) -> &[BaselineOption] {
        &self.options
    }

    /// Bumped each time the option list is rebuilt.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Interaction callback: records the user's pick for the next pass.
    pub fn select(&mut self, group: impl Into<String>) {
        self.selected = Some(group.into());
    }

    /// Rebuilds the options when the group list changed. Returns whether a
    /// rebuild happened.
    pub fn sync(&mut self, groups: &[String]) -> bool {
        if self.groups == groups && !self.options.is_empty() {
            return false;
        }

        self.options = groups
            .iter()
            .map(|group| BaselineOption {
                value: group.clone(),
                text: ellipsize_chars(group, OPTION_TEXT_MAX_CHARS),
            })
            .collect();
        self.groups = groups.to_vec();
        self.generation = self.generation.wrapping_add(1);

        let still_valid = self
            .selected
            .as_ref()
            .is_some_and(|selected| groups.contains(selected));
        if !still_valid {
            self.selected = groups.first().cloned();
        }
        debug!(
            groups = groups.len(),
            selected = self.selected.as_deref().unwrap_or_default(),
            "baseline selector rebuilt"
        );
        true
    }
}

fn ellipsize_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let mut clipped: String = text.chars().take(max_chars).collect();
    clipped.push_str("...");
    clipped
}
