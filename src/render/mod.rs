mod frame;
mod null_renderer;
mod primitives;

pub use frame::WaterfallFrame;
pub use null_renderer::NullRenderer;
pub use primitives::SegmentTooltip;

use crate::error::WaterfallResult;

/// Contract implemented by the charting collaborator.
///
/// Backends receive fully built frames and own every visual decision,
/// colors included; they never recompute waterfall geometry.
pub trait Renderer {
    fn render(&mut self, frame: &WaterfallFrame) -> WaterfallResult<()>;
}
