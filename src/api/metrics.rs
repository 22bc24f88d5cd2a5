use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::CategoryValue;
use crate::error::{WaterfallError, WaterfallResult};

/// One row of the per-category validation metrics payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ErrorMetric {
    pub error_category: Option<String>,
    pub claim_count: Option<f64>,
    pub paid_amount_aed: Option<f64>,
}

impl ErrorMetric {
    #[must_use]
    pub fn new(error_category: impl Into<String>, claim_count: f64, paid_amount_aed: f64) -> Self {
        Self {
            error_category: Some(error_category.into()),
            claim_count: Some(claim_count),
            paid_amount_aed: Some(paid_amount_aed),
        }
    }

    /// Parses a JSON array of metric rows.
    pub fn list_from_json_str(input: &str) -> WaterfallResult<Vec<Self>> {
        serde_json::from_str(input).map_err(|e| {
            WaterfallError::Serialization(format!("failed to parse metrics json: {e}"))
        })
    }
}

/// The two measures charted side by side, in category order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricSeries {
    pub counts: Vec<CategoryValue>,
    pub paid_amounts: Vec<CategoryValue>,
}

impl MetricSeries {
    /// Splits metric rows into count and paid-amount series.
    ///
    /// Rows without a category belong to `baseline_name`; missing values count
    /// as zero. Rows repeating a category are summed into its first position.
    #[must_use]
    pub fn from_metrics(metrics: &[ErrorMetric], baseline_name: &str) -> Self {
        let mut merged: IndexMap<&str, (f64, f64)> = IndexMap::with_capacity(metrics.len());
        for metric in metrics {
            let name = metric
                .error_category
                .as_deref()
                .filter(|name| !name.is_empty())
                .unwrap_or(baseline_name);
            let entry = merged.entry(name).or_insert((0.0, 0.0));
            entry.0 += metric.claim_count.unwrap_or(0.0);
            entry.1 += metric.paid_amount_aed.unwrap_or(0.0);
        }

        if merged.len() < metrics.len() {
            debug!(
                rows = metrics.len(),
                categories = merged.len(),
                "merged repeated metric categories"
            );
        }

        let mut series = Self {
            counts: Vec::with_capacity(merged.len()),
            paid_amounts: Vec::with_capacity(merged.len()),
        };
        for (name, (count, paid)) in merged {
            series.counts.push(CategoryValue::new(name, count));
            series.paid_amounts.push(CategoryValue::new(name, paid));
        }
        series
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty() && self.paid_amounts.is_empty()
    }
}
