use approx::assert_relative_eq;
use claims_waterfall::core::{
    CategoryValue, DEFAULT_BASELINE_NAME, PercentLabelPolicy, TOTAL_SEGMENT_NAME,
    annotate_percentages, build_cumulative_waterfall, build_distribution_bridge, series_total,
};
use proptest::prelude::*;

fn signed_series_strategy() -> impl Strategy<Value = Vec<CategoryValue>> {
    prop::collection::vec(-1_000_000.0f64..1_000_000.0, 0..64).prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| CategoryValue::new(format!("cat-{index}"), value))
            .collect()
    })
}

fn claim_series_strategy() -> impl Strategy<Value = (f64, Vec<f64>)> {
    (
        0u32..100_000,
        prop::collection::vec(prop_oneof![Just(0u32), 1u32..50_000], 0..24),
    )
        .prop_map(|(baseline, errors)| {
            (
                f64::from(baseline),
                errors.into_iter().map(f64::from).collect(),
            )
        })
}

proptest! {
    #[test]
    fn cumulative_totals_match_series_sum(series in signed_series_strategy()) {
        let segments = build_cumulative_waterfall(&series, true);
        prop_assert_eq!(segments.len(), series.len() + 1);

        let sum: f64 = series.iter().map(|item| item.value).sum();
        let total = segments.last().expect("total segment");
        prop_assert!(total.is_total);
        prop_assert_eq!(total.raw, total.cum_after);
        assert_relative_eq!(total.raw, sum, epsilon = 1e-6, max_relative = 1e-9);
        if let Some(last_step) = segments.iter().rev().nth(1) {
            assert_relative_eq!(last_step.cum_after, sum, epsilon = 1e-6, max_relative = 1e-9);
        }
        prop_assert_eq!(segments.iter().filter(|s| s.is_total).count(), 1);
    }

    #[test]
    fn cumulative_segments_span_the_step_interval(series in signed_series_strategy()) {
        let segments = build_cumulative_waterfall(&series, false);
        let mut cum_before = 0.0f64;
        for (segment, item) in segments.iter().zip(&series) {
            prop_assert_eq!(&segment.name, &item.name);
            prop_assert_eq!(segment.raw, item.value);
            prop_assert_eq!(segment.delta, segment.raw.abs());
            prop_assert_eq!(segment.base, cum_before.min(segment.cum_after));
            assert_relative_eq!(
                segment.base + segment.delta,
                cum_before.max(segment.cum_after),
                epsilon = 1e-6,
                max_relative = 1e-9
            );
            cum_before = segment.cum_after;
        }
    }

    #[test]
    fn builders_are_referentially_transparent(series in signed_series_strategy()) {
        prop_assert_eq!(
            build_cumulative_waterfall(&series, true),
            build_cumulative_waterfall(&series, true)
        );
        prop_assert_eq!(
            build_distribution_bridge(&series, DEFAULT_BASELINE_NAME),
            build_distribution_bridge(&series, DEFAULT_BASELINE_NAME)
        );
    }

    #[test]
    fn reconciled_bridge_lands_on_baseline((baseline, errors) in claim_series_strategy()) {
        let mut series = vec![CategoryValue::new(DEFAULT_BASELINE_NAME, baseline)];
        series.extend(
            errors
                .iter()
                .enumerate()
                .map(|(index, value)| CategoryValue::new(format!("error-{index}"), *value)),
        );
        let non_zero = errors.iter().filter(|value| **value != 0.0).count();

        let segments = build_distribution_bridge(&series, DEFAULT_BASELINE_NAME);
        let baseline_bar = segments.last().expect("baseline bar");
        prop_assert_eq!(&baseline_bar.name, DEFAULT_BASELINE_NAME);
        prop_assert!(segments.iter().all(|s| !s.is_total));

        if non_zero == 0 {
            prop_assert_eq!(segments.len(), 1);
            prop_assert_eq!(baseline_bar.cum_after, series_total(&series));
        } else {
            prop_assert_eq!(segments.len(), non_zero + 2);
            prop_assert_eq!(&segments[0].name, TOTAL_SEGMENT_NAME);
            prop_assert_eq!(segments[0].raw, series_total(&series));
            for reduction in &segments[1..segments.len() - 1] {
                prop_assert!(reduction.raw < 0.0);
                prop_assert!(!reduction.positive);
            }
            // Integer-valued inputs keep every partial sum exact.
            prop_assert_eq!(segments[segments.len() - 2].cum_after, baseline);
            prop_assert_eq!(baseline_bar.cum_after, baseline);
        }
    }

    #[test]
    fn percent_labels_respect_threshold(
        series in signed_series_strategy(),
        threshold in 0.0f64..50.0,
    ) {
        let segments = build_cumulative_waterfall(&series, true);
        let total = series_total(&series);
        let annotated = annotate_percentages(&segments, total, PercentLabelPolicy::new(threshold));
        prop_assert_eq!(annotated.len(), segments.len());

        for (annotated, segment) in annotated.iter().zip(&segments) {
            prop_assert_eq!(&annotated.segment, segment);
            if annotated.pct_label.is_empty() {
                continue;
            }
            prop_assert!(total > 0.0);
            let digits = annotated.pct_label.trim_end_matches('%');
            let percent: f64 = digits.parse().expect("numeric label");
            prop_assert!(percent >= threshold);
        }
    }

    #[test]
    fn zero_total_never_labels(values in prop::collection::vec(-100.0f64..100.0, 0..16)) {
        let series: Vec<CategoryValue> = values
            .iter()
            .map(|value| CategoryValue::new("x", *value))
            .collect();
        let segments = build_cumulative_waterfall(&series, true);
        let annotated = annotate_percentages(&segments, 0.0, PercentLabelPolicy::default());
        prop_assert!(annotated.iter().all(|a| a.pct_label.is_empty()));
    }
}
