//! Chart assembly on top of the pure builders in [`crate::core`].

mod chart;
mod config;
mod engine;
mod format;
mod json_contract;
mod metrics;

pub use chart::{CLAIM_COUNT_TITLE, PAID_AMOUNT_TITLE, build_chart, segment_tooltip};
pub use config::{DEFAULT_CURRENCY_CODE, NumberLocale, WaterfallChartConfig};
pub use engine::WaterfallEngine;
pub use format::{MeasureFormat, ValueFormatter, format_count, format_currency};
pub use json_contract::{WATERFALL_FRAME_JSON_SCHEMA_V1, WaterfallFrameJsonContractV1};
pub use metrics::{ErrorMetric, MetricSeries};
