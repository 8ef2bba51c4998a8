use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::Viewport;
use crate::error::GapChartResult;
use crate::render::{RenderFrame, Renderer};

use super::validation::validate_viewport;
use super::{
    ChartMetadata, ContainerLayout, FormatInfo, Frame, GapChartConfig, GapChartEngine,
    GapViewModel, HoverArea, LegendModel, RowLayout, ScrollState, StatementRecord, VisualUpdate,
    apply_scroll_policy, build_gap_scene, build_group_metadata, content_height, convert_dataset,
    extract_records, layout_frame, layout_hover_area, layout_legend, resolve_container_heights,
    resolve_container_layout, resolve_format_info, resolve_row_layout, validate_config,
};

/// Pipeline state for the current pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderPhase {
    Idle,
    Converting,
    LayoutFrame,
    LegendLayout,
    Extracting,
    ScrollDecision,
    Ready,
    NoRender,
}

/// Complete geometry for one pass. Built fresh every time; nothing in it is
/// shared with a previous pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapLayout {
    pub config: GapChartConfig,
    pub format_info: FormatInfo,
    pub metadata: ChartMetadata,
    pub frame: Frame,
    pub legend: LegendModel,
    pub hover: HoverArea,
    pub records: Vec<StatementRecord>,
    pub scroll: ScrollState,
    pub containers: ContainerLayout,
    pub rows: RowLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderOutcome {
    /// Input rejected; the renderer receives an empty frame.
    NoRender,
    /// Only a baseline series: the selector was refreshed, nothing else.
    SelectorOnly,
    Ready(Box<GapLayout>),
}

impl RenderOutcome {
    #[must_use]
    pub fn layout(&self) -> Option<&GapLayout> {
        match self {
            Self::Ready(layout) => Some(layout),
            Self::NoRender | Self::SelectorOnly => None,
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

impl<R: Renderer> GapChartEngine<R> {
    /// Runs the whole pipeline and draws the result.
    ///
    /// A failed pass still hands an empty frame to the renderer when the
    /// viewport is drawable.
    pub fn update(&mut self, update: &VisualUpdate) -> GapChartResult<RenderOutcome> {
        let outcome = match self.layout(update) {
            Ok(outcome) => outcome,
            Err(err) => {
                if update.viewport.is_valid() {
                    self.renderer.render(&RenderFrame::new(update.viewport))?;
                }
                return Err(err);
            }
        };
        let frame = match &outcome {
            RenderOutcome::Ready(layout) => build_gap_scene(layout, &self.services),
            RenderOutcome::NoRender | RenderOutcome::SelectorOnly => {
                RenderFrame::new(update.viewport)
            }
        };
        self.renderer.render(&frame)?;
        trace!(
            lines = frame.lines.len(),
            rects = frame.rects.len(),
            circles = frame.circles.len(),
            texts = frame.texts.len(),
            "frame rendered"
        );
        Ok(outcome)
    }

    /// Runs the pipeline without drawing. Any error leaves the engine in
    /// `RenderPhase::NoRender`.
    pub fn layout(&mut self, update: &VisualUpdate) -> GapChartResult<RenderOutcome> {
        let result = self.run_pipeline(update);
        if let Err(err) = &result {
            debug!(error = %err, "pass failed");
            self.enter(RenderPhase::NoRender);
        }
        result
    }

    fn run_pipeline(&mut self, update: &VisualUpdate) -> GapChartResult<RenderOutcome> {
        let viewport = validate_viewport(update.viewport)?;
        let config = GapChartConfig::from_property_bag(&update.properties);
        validate_config(&config)?;

        self.enter(RenderPhase::Converting);
        let Some(view_model) = convert_dataset(&update.result_sets, &config) else {
            self.enter(RenderPhase::NoRender);
            return Ok(RenderOutcome::NoRender);
        };

        self.selector.sync(&view_model.group_names());
        if view_model.is_single_series() {
            debug!("single series; refreshing baseline selector only");
            self.enter(RenderPhase::NoRender);
            return Ok(RenderOutcome::SelectorOnly);
        }

        let layout = self.run_layout(viewport, &view_model, config)?;
        self.enter(RenderPhase::Ready);
        Ok(RenderOutcome::Ready(Box::new(layout)))
    }

    fn run_layout(
        &mut self,
        viewport: Viewport,
        view_model: &GapViewModel,
        config: GapChartConfig,
    ) -> GapChartResult<GapLayout> {
        let dataset = view_model.dataset();
        let services = &self.services;

        let format_info = resolve_format_info(
            dataset,
            self.selector.selected(),
            config.general.format_string.as_deref(),
        );

        self.phase = RenderPhase::LayoutFrame;
        trace!(phase = ?self.phase, "render phase");
        let frame = layout_frame(dataset, viewport, &format_info, &config, services)?;
        let metadata = build_group_metadata(&format_info, &config, services.palette());

        self.phase = RenderPhase::LegendLayout;
        trace!(phase = ?self.phase, "render phase");
        let legend = layout_legend(&frame, &metadata, &config, services);
        let hover = layout_hover_area(&frame, &legend, &config, services);
        let heights = resolve_container_heights(&frame, &legend, &hover, &config);

        self.phase = RenderPhase::Extracting;
        trace!(phase = ?self.phase, "render phase");
        let mut records = extract_records(dataset, &frame, &format_info, &metadata, services);

        self.phase = RenderPhase::ScrollDecision;
        trace!(phase = ?self.phase, "render phase");
        let content = content_height(&frame, view_model.category_count(), view_model.series_count());
        let (scrolled_frame, scroll) = apply_scroll_policy(frame, content, heights.opinion)?;
        if scrolled_frame.scale != frame.scale {
            trace!("scale changed by scroll policy; re-projecting records");
            records = extract_records(dataset, &scrolled_frame, &format_info, &metadata, services);
        }

        let containers = resolve_container_layout(&scrolled_frame, heights, &scroll);
        let rows = resolve_row_layout(&scrolled_frame, &records);

        Ok(GapLayout {
            config,
            format_info,
            metadata,
            frame: scrolled_frame,
            legend,
            hover,
            records,
            scroll,
            containers,
            rows,
        })
    }

    fn enter(&mut self, phase: RenderPhase) {
        trace!(from = ?self.phase, to = ?phase, "render phase");
        self.phase = phase;
    }
}
