use serde::{Deserialize, Serialize};

use crate::core::{AnnotatedSegment, ChartSegment};

/// Percent labels below this value are suppressed unless configured otherwise.
pub const DEFAULT_MIN_VISIBLE_PERCENT: f64 = 2.0;

/// Visibility rule for percentage-of-total labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PercentLabelPolicy {
    /// Smallest rounded percentage that still gets a label.
    pub min_visible_percent: f64,
}

impl Default for PercentLabelPolicy {
    fn default() -> Self {
        Self {
            min_visible_percent: DEFAULT_MIN_VISIBLE_PERCENT,
        }
    }
}

impl PercentLabelPolicy {
    #[must_use]
    pub fn new(min_visible_percent: f64) -> Self {
        Self {
            min_visible_percent,
        }
    }

    /// Label for `magnitude` as a share of `total`, or an empty string.
    ///
    /// Totals that are zero, negative or non-finite carry no meaningful share
    /// and yield no label.
    #[must_use]
    pub fn label(self, magnitude: f64, total: f64) -> String {
        if !total.is_finite() || total <= 0.0 {
            return String::new();
        }
        let percent = (magnitude / total * 100.0).round();
        if !percent.is_finite() || percent < self.min_visible_percent {
            return String::new();
        }
        // Adding zero folds a rounded `-0.0` into `0.0`.
        format!("{:.0}%", percent + 0.0)
    }
}

/// Attaches percentage-of-total labels to builder output.
///
/// `total` must be the sum of the original series, taken before any bridge
/// decomposition, so both modes label against the same denominator.
#[must_use]
pub fn annotate_percentages(
    segments: &[ChartSegment],
    total: f64,
    policy: PercentLabelPolicy,
) -> Vec<AnnotatedSegment> {
    segments
        .iter()
        .map(|segment| AnnotatedSegment {
            pct_label: policy.label(segment.label_magnitude(), total),
            segment: segment.clone(),
        })
        .collect()
}
