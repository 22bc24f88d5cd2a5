use crate::error::WaterfallResult;
use crate::render::{Renderer, WaterfallFrame};

/// No-op renderer used by tests, the export tool, and headless hosts.
///
/// It still validates frames so tests catch broken geometry before a real
/// charting backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_segment_count: usize,
    pub last_label_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &WaterfallFrame) -> WaterfallResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_segment_count = frame.segments.len();
        self.last_label_count = frame.labeled_segment_count();
        Ok(())
    }
}
