use serde::{Deserialize, Serialize};

/// One category of an ordered input series.
///
/// Order within a series is the legend/x-axis order and is preserved by every
/// builder except the bridge decomposition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryValue {
    pub name: String,
    pub value: f64,
}

impl CategoryValue {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// How a segment should be read by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SegmentRole {
    Increase,
    Decrease,
    Total,
}

/// Bar geometry for one waterfall step.
///
/// A renderer stacks an invisible bar of height `base` and a visible bar of
/// height `delta` on top of it. `base` is always the lower end of the step, so
/// the visible bar spans `[min(before, after), max(before, after)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSegment {
    pub name: String,
    pub base: f64,
    pub delta: f64,
    pub positive: bool,
    pub cum_after: f64,
    pub raw: f64,
    #[serde(default)]
    pub is_total: bool,
}

impl ChartSegment {
    /// Builds the step that moves the running sum from `cum_before` by `raw`.
    #[must_use]
    pub fn step(name: impl Into<String>, cum_before: f64, raw: f64) -> Self {
        let cum_after = cum_before + raw;
        let positive = raw >= 0.0;
        Self {
            name: name.into(),
            base: if positive { cum_before } else { cum_after },
            delta: raw.abs(),
            positive,
            cum_after,
            raw,
            is_total: false,
        }
    }

    /// Builds the synthetic bar that summarizes a running sum from zero.
    #[must_use]
    pub fn total(name: impl Into<String>, cumulative: f64) -> Self {
        Self {
            is_total: true,
            ..Self::anchored(name, cumulative)
        }
    }

    /// Builds a bar standing on zero that closes at `value`, regardless of
    /// where the previous step ended.
    #[must_use]
    pub fn anchored(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            base: 0.0,
            delta: value.abs(),
            positive: value >= 0.0,
            cum_after: value,
            raw: value,
            is_total: false,
        }
    }

    /// Value the bar is drawn from, the far end being `cum_after`.
    ///
    /// For a step this is where the previous bar ended. Total bars and the
    /// closing bar of a bridge stand on zero and start at 0, so they do not
    /// continue the previous bar.
    #[must_use]
    pub fn span_start(&self) -> f64 {
        self.cum_after - self.raw
    }

    /// Value a percentage label is computed from.
    #[must_use]
    pub fn label_magnitude(&self) -> f64 {
        if self.is_total {
            self.cum_after
        } else {
            self.raw
        }
    }

    #[must_use]
    pub fn role(&self) -> SegmentRole {
        if self.is_total {
            SegmentRole::Total
        } else if self.positive {
            SegmentRole::Increase
        } else {
            SegmentRole::Decrease
        }
    }
}

/// A segment decorated with its percentage-of-total label.
///
/// `pct_label` is empty when the percentage falls below the visibility
/// threshold or when no meaningful total exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedSegment {
    #[serde(flatten)]
    pub segment: ChartSegment,
    pub pct_label: String,
}

impl AnnotatedSegment {
    #[must_use]
    pub fn unlabeled(segment: ChartSegment) -> Self {
        Self {
            segment,
            pct_label: String::new(),
        }
    }
}

/// Arithmetic sum of all values, including negatives and non-finite ones.
#[must_use]
pub fn series_total(series: &[CategoryValue]) -> f64 {
    series.iter().map(|item| item.value).sum()
}
