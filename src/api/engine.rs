use tracing::{debug, info};

use crate::core::{CategoryValue, WaterfallMode};
use crate::error::WaterfallResult;
use crate::render::{Renderer, WaterfallFrame};

use super::{
    CLAIM_COUNT_TITLE, ErrorMetric, MetricSeries, PAID_AMOUNT_TITLE, ValueFormatter,
    WaterfallChartConfig, build_chart,
};

/// Drives chart assembly into a renderer.
///
/// The engine keeps only its renderer and configuration; mode and data come
/// with every call, so repeated calls with the same input render identical
/// frames.
pub struct WaterfallEngine<R: Renderer> {
    renderer: R,
    config: WaterfallChartConfig,
}

impl<R: Renderer> WaterfallEngine<R> {
    pub fn new(renderer: R, config: WaterfallChartConfig) -> WaterfallResult<Self> {
        let config = config.validate()?;
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn config(&self) -> &WaterfallChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: WaterfallChartConfig) -> WaterfallResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn count_formatter(&self) -> ValueFormatter {
        ValueFormatter::count(self.config.locale)
    }

    #[must_use]
    pub fn currency_formatter(&self) -> ValueFormatter {
        ValueFormatter::currency(self.config.currency_code.as_str(), self.config.locale)
    }

    /// Builds a frame without rendering it.
    #[must_use]
    pub fn build_frame(
        &self,
        title: &str,
        series: &[CategoryValue],
        formatter: &ValueFormatter,
        mode: WaterfallMode,
    ) -> WaterfallFrame {
        build_chart(title, series, mode, formatter, &self.config)
    }

    pub fn render_series(
        &mut self,
        title: &str,
        series: &[CategoryValue],
        formatter: &ValueFormatter,
        mode: WaterfallMode,
    ) -> WaterfallResult<WaterfallFrame> {
        let frame = self.build_frame(title, series, formatter, mode);
        self.renderer.render(&frame)?;
        Ok(frame)
    }

    /// Renders the claim-count and paid-amount charts for a metrics payload.
    ///
    /// An empty payload renders nothing and returns no frames.
    pub fn render_error_waterfalls(
        &mut self,
        metrics: &[ErrorMetric],
        mode: WaterfallMode,
    ) -> WaterfallResult<Vec<WaterfallFrame>> {
        if metrics.is_empty() {
            debug!("no metrics to chart");
            return Ok(Vec::new());
        }

        let series = MetricSeries::from_metrics(metrics, &self.config.baseline_name);
        let count_formatter = self.count_formatter();
        let currency_formatter = self.currency_formatter();

        let counts =
            self.render_series(CLAIM_COUNT_TITLE, &series.counts, &count_formatter, mode)?;
        let paid = self.render_series(
            PAID_AMOUNT_TITLE,
            &series.paid_amounts,
            &currency_formatter,
            mode,
        )?;

        info!(
            mode = mode.as_str(),
            categories = series.counts.len(),
            "rendered error waterfalls"
        );
        Ok(vec![counts, paid])
    }
}
