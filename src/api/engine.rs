use serde::{Deserialize, Serialize};

use crate::core::{CategoricalDataset, Viewport};
use crate::render::Renderer;

use super::{BaselineSelector, LayoutServices, PropertyBag, RenderPhase};

/// Everything the host hands over on a data or viewport change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualUpdate {
    pub viewport: Viewport,
    #[serde(default)]
    pub properties: PropertyBag,
    /// `result_sets[0]` is the primary dataset; `result_sets[1]` may carry a sort-by series.
    #[serde(default)]
    pub result_sets: Vec<CategoricalDataset>,
}

impl VisualUpdate {
    #[must_use]
    pub fn new(viewport: Viewport, primary: CategoricalDataset) -> Self {
        Self {
            viewport,
            properties: PropertyBag::default(),
            result_sets: vec![primary],
        }
    }

    #[must_use]
    pub fn with_properties(mut self, properties: PropertyBag) -> Self {
        self.properties = properties;
        self
    }

    #[must_use]
    pub fn with_sort_by(mut self, sort_by: CategoricalDataset) -> Self {
        self.result_sets.truncate(1);
        self.result_sets.push(sort_by);
        self
    }
}

/// Main facade consumed by host applications.
///
/// `GapChartEngine` runs the layout pipeline for each update and hands the
/// resulting scene to its renderer. The baseline selection is the only state
/// carried from one pass to the next.
pub struct GapChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) services: LayoutServices,
    pub(super) selector: BaselineSelector,
    pub(super) phase: RenderPhase,
}

impl<R: Renderer> GapChartEngine<R> {
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self::with_services(renderer, LayoutServices::default())
    }

    #[must_use]
    pub fn with_services(renderer: R, services: LayoutServices) -> Self {
        Self {
            renderer,
            services,
            selector: BaselineSelector::new(),
            phase: RenderPhase::Idle,
        }
    }
}
