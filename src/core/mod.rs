//! Pure waterfall data model and builders.
//!
//! Nothing here holds state between calls; every function maps its inputs to
//! a fresh output vector.

pub mod bridge;
pub mod cumulative;
pub mod mode;
pub mod percent;
pub mod types;

pub use bridge::{DEFAULT_BASELINE_NAME, build_distribution_bridge};
pub use cumulative::{TOTAL_SEGMENT_NAME, build_cumulative_waterfall};
pub use mode::{BuildOptions, WaterfallMode, build_segments};
pub use percent::{DEFAULT_MIN_VISIBLE_PERCENT, PercentLabelPolicy, annotate_percentages};
pub use types::{AnnotatedSegment, CategoryValue, ChartSegment, SegmentRole, series_total};
