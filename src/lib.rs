//! claims-waterfall: waterfall and bridge chart data for claim validation results.
//!
//! [`core`] turns ordered category values into segment geometry and
//! percentage labels. [`api`] formats values, assembles frames and drives a
//! [`render::Renderer`] supplied by the host.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{WaterfallChartConfig, WaterfallEngine};
pub use error::{WaterfallError, WaterfallResult};
