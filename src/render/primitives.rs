use serde::{Deserialize, Serialize};

use crate::error::{WaterfallError, WaterfallResult};

/// Hover text for one segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentTooltip {
    /// Category name shown as the tooltip heading.
    pub label: String,
    /// Signed change contributed by the segment.
    pub value_text: String,
    /// Running total after the segment.
    pub cumulative_text: String,
}

impl SegmentTooltip {
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        value_text: impl Into<String>,
        cumulative_text: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value_text: value_text.into(),
            cumulative_text: cumulative_text.into(),
        }
    }

    pub fn validate(&self) -> WaterfallResult<()> {
        if self.value_text.is_empty() || self.cumulative_text.is_empty() {
            return Err(WaterfallError::InvalidFrame(format!(
                "tooltip for `{}` must carry value and cumulative text",
                self.label
            )));
        }
        Ok(())
    }
}
