use tracing::{debug, trace};

use crate::core::cumulative::{TOTAL_SEGMENT_NAME, build_cumulative_waterfall};
use crate::core::{CategoryValue, ChartSegment, series_total};

/// Category a bridge reconciles toward unless configured otherwise.
pub const DEFAULT_BASELINE_NAME: &str = "No error";

/// Decomposes a series into a bridge from its grand total down to a baseline.
///
/// The first segment is the grand total. Every non-baseline category with a
/// non-zero value follows, in input order, as a reduction of `|value|`. The
/// baseline closes the bridge as a bar standing on zero, so its `cum_after`
/// is always the baseline value. When there is nothing to subtract the result
/// is a single bar holding the whole total under the baseline name.
///
/// No balancing is applied: if the baseline plus the reductions does not add
/// up to the total, the last reduction ends away from the top of the baseline
/// bar and the chart shows that gap.
#[must_use]
pub fn build_distribution_bridge(
    series: &[CategoryValue],
    baseline_name: &str,
) -> Vec<ChartSegment> {
    let total = series_total(series);
    let baseline_value = series
        .iter()
        .find(|item| item.name == baseline_name)
        .map_or(0.0, |item| item.value);
    let others: Vec<CategoryValue> = series
        .iter()
        .filter(|item| item.name != baseline_name && item.value != 0.0)
        .map(|item| CategoryValue::new(item.name.as_str(), -item.value.abs()))
        .collect();

    if others.is_empty() {
        trace!(baseline = baseline_name, total, "bridge has no reductions");
        return build_cumulative_waterfall(&[CategoryValue::new(baseline_name, total)], false);
    }

    let mut steps = Vec::with_capacity(others.len() + 1);
    steps.push(CategoryValue::new(TOTAL_SEGMENT_NAME, total));
    steps.extend(others);

    let mut segments = build_cumulative_waterfall(&steps, false);
    let landing = segments.last().map_or(total, |last| last.cum_after);
    if landing != baseline_value {
        debug!(
            baseline = baseline_name,
            total,
            baseline_value,
            landing,
            gap = landing - baseline_value,
            "bridge does not reconcile to the baseline"
        );
    }
    segments.push(ChartSegment::anchored(baseline_name, baseline_value));
    segments
}
