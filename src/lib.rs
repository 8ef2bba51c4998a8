//! gap-chart: layout engine for baseline-versus-target "gap" charts.
//!
//! The crate turns categorical query results into fully resolved geometry
//! (frame, records, legend, scroll state) and hands a backend-agnostic scene
//! to a [`render::Renderer`]. Layout and drawing are kept strictly apart.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{GapChartConfig, GapChartEngine, RenderOutcome, VisualUpdate};
pub use error::{GapChartError, GapChartResult};
