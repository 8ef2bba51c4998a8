mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::{NullRenderer, RecordingRenderer};
pub use primitives::{CirclePrimitive, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::GapChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`; no geometry is
/// recomputed on the drawing side.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> GapChartResult<()>;
}
