use serde::{Deserialize, Serialize};

use crate::core::bridge::{DEFAULT_BASELINE_NAME, build_distribution_bridge};
use crate::core::cumulative::build_cumulative_waterfall;
use crate::core::{CategoryValue, ChartSegment};

/// Layout used to turn a series into segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WaterfallMode {
    /// Left-to-right accumulation with a trailing total.
    Cumulative,
    /// Grand total broken down into reductions and a baseline.
    #[default]
    Bridge,
}

impl WaterfallMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cumulative => "cumulative",
            Self::Bridge => "bridge",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "cumulative" => Some(Self::Cumulative),
            "bridge" => Some(Self::Bridge),
            _ => None,
        }
    }
}

/// Per-call knobs shared by both builders.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOptions {
    /// Append a total bar in cumulative mode.
    pub include_total: bool,
    /// Category the bridge closes on.
    pub baseline_name: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            include_total: true,
            baseline_name: DEFAULT_BASELINE_NAME.to_owned(),
        }
    }
}

/// Builds segments for `series` with the builder selected by `mode`.
#[must_use]
pub fn build_segments(
    series: &[CategoryValue],
    mode: WaterfallMode,
    options: &BuildOptions,
) -> Vec<ChartSegment> {
    match mode {
        WaterfallMode::Cumulative => build_cumulative_waterfall(series, options.include_total),
        WaterfallMode::Bridge => build_distribution_bridge(series, &options.baseline_name),
    }
}
