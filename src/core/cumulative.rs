use tracing::trace;

use crate::core::{CategoryValue, ChartSegment};

/// Name given to the synthetic segment that summarizes a whole series.
pub const TOTAL_SEGMENT_NAME: &str = "Total";

/// Turns a signed series into stacked waterfall steps.
///
/// Steps follow input order. Each step starts where the previous one ended,
/// beginning at zero. When `include_total` is set a trailing total bar is
/// appended, including for an empty series so the chart keeps a stable shell.
#[must_use]
pub fn build_cumulative_waterfall(
    series: &[CategoryValue],
    include_total: bool,
) -> Vec<ChartSegment> {
    let mut segments = Vec::with_capacity(series.len() + usize::from(include_total));
    segments.extend(series.iter().scan(0.0_f64, |cum, item| {
        let segment = ChartSegment::step(item.name.as_str(), *cum, item.value);
        *cum = segment.cum_after;
        Some(segment)
    }));

    if include_total {
        let cumulative = segments.last().map_or(0.0, |last| last.cum_after);
        segments.push(ChartSegment::total(TOTAL_SEGMENT_NAME, cumulative));
    }

    trace!(
        categories = series.len(),
        segments = segments.len(),
        include_total,
        "built cumulative waterfall"
    );
    segments
}
