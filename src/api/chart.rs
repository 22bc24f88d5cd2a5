use tracing::debug;

use crate::core::{
    AnnotatedSegment, CategoryValue, ChartSegment, WaterfallMode, annotate_percentages,
    build_segments, series_total,
};
use crate::render::{SegmentTooltip, WaterfallFrame};

use super::{ValueFormatter, WaterfallChartConfig};

/// Title of the claim-count chart on the error dashboard.
pub const CLAIM_COUNT_TITLE: &str = "Claim counts by error category";
/// Title of the paid-amount chart on the error dashboard.
pub const PAID_AMOUNT_TITLE: &str = "Paid amount by error category";

/// Builds the full frame for one series.
///
/// The percentage denominator is the sum of `series` as given, so cumulative
/// and bridge layouts of the same data carry the same labels per category.
#[must_use]
pub fn build_chart(
    title: &str,
    series: &[CategoryValue],
    mode: WaterfallMode,
    formatter: &ValueFormatter,
    config: &WaterfallChartConfig,
) -> WaterfallFrame {
    let total = series_total(series);
    let segments = build_segments(series, mode, &config.build_options());
    let annotated = if config.show_percent {
        annotate_percentages(&segments, total, config.percent_label)
    } else {
        segments.into_iter().map(AnnotatedSegment::unlabeled).collect()
    };

    let frame = annotated
        .into_iter()
        .fold(WaterfallFrame::new(title, mode, total), |frame, segment| {
            let tooltip = segment_tooltip(&segment.segment, formatter);
            frame.with_segment(segment, tooltip)
        });

    debug!(
        title,
        mode = mode.as_str(),
        categories = series.len(),
        segments = frame.segments.len(),
        labels = frame.labeled_segment_count(),
        "built waterfall chart"
    );
    frame
}

/// Tooltip text for a segment: its signed change and the running total.
#[must_use]
pub fn segment_tooltip(segment: &ChartSegment, formatter: &ValueFormatter) -> SegmentTooltip {
    SegmentTooltip::new(
        segment.name.as_str(),
        formatter.format(segment.raw),
        formatter.format(segment.cum_after),
    )
}
