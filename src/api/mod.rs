mod baseline_selector;
mod container_layout_resolver;
mod dataset_converter;
mod dataset_sorter;
mod engine;
mod engine_accessors;
mod engine_config;
mod format_resolver;
mod frame_layout_engine;
mod gap_scene_builder;
mod group_metadata_builder;
mod hover_area_layout;
mod layout_services;
mod legend_layout_engine;
mod property_bag;
mod record_extractor;
mod render_orchestrator;
mod row_layout_resolver;
mod scroll_policy;
mod validation;

pub use baseline_selector::{BaselineOption, BaselineSelector};
pub use container_layout_resolver::{
    ContainerHeights, ContainerLayout, resolve_container_heights, resolve_container_layout,
};
pub use dataset_converter::{ConversionRejection, GapViewModel, check_primary, convert_dataset};
pub use dataset_sorter::{SortSource, resolve_sort_permutation, sort_dataset};
pub use engine::{GapChartEngine, VisualUpdate};
pub use engine_config::{
    DataLabelConfig, FontConfig, GapBarConfig, GapChartConfig, GapLabelConfig, GapLabelPosition,
    GapType, GeneralConfig, HoverConfig, LegendConfig, NodeConfig, SortConfig, SortOrder,
    StatementConfig,
};
pub use format_resolver::{FormatInfo, resolve_format_info};
pub use frame_layout_engine::{
    BAR_POSITION_IN_ROW, DEFAULT_RIGHT_MARGIN_PX, Frame, MIN_BAR_WIDTH_PX,
    STATEMENT_POSITION_IN_ROW, TOP_MARGIN_PX, clamp_bar_width, layout_frame,
};
pub use gap_scene_builder::{build_gap_scene, node_radius};
pub use group_metadata_builder::{ChartMetadata, GroupMetadata, NodeRole, build_group_metadata};
pub use hover_area_layout::{HoverArea, layout_hover_area, layout_hover_text, layout_node_focus};
pub use layout_services::LayoutServices;
pub use legend_layout_engine::{LegendItem, LegendModel, layout_legend};
pub use property_bag::PropertyBag;
pub use record_extractor::{
    GapMeasure, GapTrend, OpinionNode, StatementRecord, TargetNode, compute_gap, extract_record,
    extract_records,
};
pub use render_orchestrator::{GapLayout, RenderOutcome, RenderPhase};
pub use row_layout_resolver::{RowLayout, RowPlacement, resolve_row_layout};
pub use scroll_policy::{
    SCROLL_RIGHT_MARGIN_PX, SCROLLED_BAR_POSITION_IN_ROW, SCROLLED_ROWS_CONTAINER_WIDTH_PX,
    ScrollState, apply_scroll_policy, content_height,
};
pub use validation::validate_config;
