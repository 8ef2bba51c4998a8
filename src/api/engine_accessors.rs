use crate::render::Renderer;

use super::{BaselineSelector, GapChartEngine, LayoutServices, RenderPhase};

impl<R: Renderer> GapChartEngine<R> {
    #[must_use]
    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    #[must_use]
    pub fn selector(&self) -> &BaselineSelector {
        &self.selector
    }

    #[must_use]
    pub fn services(&self) -> &LayoutServices {
        &self.services
    }

    /// Baseline-selector interaction callback; takes effect on the next pass.
    pub fn select_baseline(&mut self, group: impl Into<String>) {
        self.selector.select(group);
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
