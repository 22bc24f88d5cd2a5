use serde::{Deserialize, Serialize};

use crate::core::{AnnotatedSegment, ChartSegment, WaterfallMode};
use crate::error::{WaterfallError, WaterfallResult};
use crate::render::SegmentTooltip;

/// Backend-agnostic description of one waterfall chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterfallFrame {
    pub title: String,
    pub mode: WaterfallMode,
    /// Sum of the series the frame was built from, before decomposition.
    pub total: f64,
    pub segments: Vec<AnnotatedSegment>,
    pub tooltips: Vec<SegmentTooltip>,
}

impl WaterfallFrame {
    #[must_use]
    pub fn new(title: impl Into<String>, mode: WaterfallMode, total: f64) -> Self {
        Self {
            title: title.into(),
            mode,
            total,
            segments: Vec::new(),
            tooltips: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_segment(mut self, segment: AnnotatedSegment, tooltip: SegmentTooltip) -> Self {
        self.segments.push(segment);
        self.tooltips.push(tooltip);
        self
    }

    /// Checks per-bar geometry: `delta == |raw|`, `base` is `span_start()` for
    /// increases and `cum_after` for decreases (or zero for bars standing on
    /// zero), and a total bar is last and starts at zero. Continuity between
    /// neighbouring bars is not checked since a bridge's closing bar restarts
    /// from zero.
    ///
    /// Non-finite values are passed through unchecked; renderers clip them.
    pub fn validate(&self) -> WaterfallResult<()> {
        if self.tooltips.len() != self.segments.len() {
            return Err(WaterfallError::InvalidFrame(format!(
                "frame `{}` has {} segments but {} tooltips",
                self.title,
                self.segments.len(),
                self.tooltips.len()
            )));
        }

        let last_index = self.segments.len().saturating_sub(1);
        for (index, annotated) in self.segments.iter().enumerate() {
            let segment = &annotated.segment;
            if segment.raw.is_finite() && segment.delta != segment.raw.abs() {
                return Err(WaterfallError::InvalidFrame(format!(
                    "segment `{}` delta {} does not match |raw| {}",
                    segment.name,
                    segment.delta,
                    segment.raw.abs()
                )));
            }
            let start = segment.span_start();
            let expected = if segment.positive {
                start
            } else {
                segment.cum_after
            };
            let stands_on_zero = segment.base == 0.0 && start == 0.0;
            if expected.is_finite()
                && !stands_on_zero
                && !within_rounding(segment.base, expected, segment)
            {
                return Err(WaterfallError::InvalidFrame(format!(
                    "segment `{}` base {} does not match its span start {} for raw {}",
                    segment.name, segment.base, expected, segment.raw
                )));
            }
            if segment.is_total {
                if index != last_index {
                    return Err(WaterfallError::InvalidFrame(format!(
                        "total segment `{}` must be the last segment",
                        segment.name
                    )));
                }
                if segment.base != 0.0 {
                    return Err(WaterfallError::InvalidFrame(format!(
                        "total segment `{}` must start at zero",
                        segment.name
                    )));
                }
            }
        }

        for tooltip in &self.tooltips {
            tooltip.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn labeled_segment_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| !segment.pct_label.is_empty())
            .count()
    }
}

// `span_start` is recomputed as `cum_after - raw`, which may differ from the
// running sum by an ulp of the larger operand.
fn within_rounding(actual: f64, expected: f64, segment: &ChartSegment) -> bool {
    let scale = segment.cum_after.abs().max(segment.raw.abs()).max(1.0);
    (actual - expected).abs() <= scale * 1e-12
}
