use serde::{Deserialize, Serialize};

use crate::core::{BuildOptions, DEFAULT_BASELINE_NAME, PercentLabelPolicy};
use crate::error::{WaterfallError, WaterfallResult};

/// Currency used for paid amounts when no other code is configured.
pub const DEFAULT_CURRENCY_CODE: &str = "AED";

/// Locale preset used by value formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NumberLocale {
    #[default]
    EnUs,
    EsEs,
}

impl NumberLocale {
    #[must_use]
    pub(crate) fn group_separator(self) -> char {
        match self {
            Self::EnUs => ',',
            Self::EsEs => '.',
        }
    }

    /// Fewest integer digits for which grouping is applied.
    #[must_use]
    pub(crate) fn min_grouping_digits(self) -> usize {
        match self {
            Self::EnUs => 4,
            Self::EsEs => 5,
        }
    }
}

/// Runtime configuration for chart assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterfallChartConfig {
    pub baseline_name: String,
    pub include_total: bool,
    pub show_percent: bool,
    pub percent_label: PercentLabelPolicy,
    pub locale: NumberLocale,
    pub currency_code: String,
}

impl Default for WaterfallChartConfig {
    fn default() -> Self {
        Self {
            baseline_name: DEFAULT_BASELINE_NAME.to_owned(),
            include_total: true,
            show_percent: true,
            percent_label: PercentLabelPolicy::default(),
            locale: NumberLocale::default(),
            currency_code: DEFAULT_CURRENCY_CODE.to_owned(),
        }
    }
}

impl WaterfallChartConfig {
    #[must_use]
    pub fn with_baseline_name(mut self, baseline_name: impl Into<String>) -> Self {
        self.baseline_name = baseline_name.into();
        self
    }

    #[must_use]
    pub fn with_include_total(mut self, include_total: bool) -> Self {
        self.include_total = include_total;
        self
    }

    #[must_use]
    pub fn with_show_percent(mut self, show_percent: bool) -> Self {
        self.show_percent = show_percent;
        self
    }

    #[must_use]
    pub fn with_min_visible_percent(mut self, min_visible_percent: f64) -> Self {
        self.percent_label = PercentLabelPolicy::new(min_visible_percent);
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_currency_code(mut self, currency_code: impl Into<String>) -> Self {
        self.currency_code = currency_code.into();
        self
    }

    pub fn validate(self) -> WaterfallResult<Self> {
        if self.baseline_name.trim().is_empty() {
            return Err(WaterfallError::InvalidConfig(
                "baseline name must not be empty".to_owned(),
            ));
        }

        let threshold = self.percent_label.min_visible_percent;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(WaterfallError::InvalidConfig(format!(
                "min visible percent must be finite and >= 0, got {threshold}"
            )));
        }

        if !is_currency_code(&self.currency_code) {
            return Err(WaterfallError::InvalidConfig(format!(
                "currency code `{}` must be three ASCII letters",
                self.currency_code
            )));
        }

        Ok(self)
    }

    /// Parses and validates a JSON config. Missing fields take their defaults.
    pub fn from_json_str(input: &str) -> WaterfallResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            WaterfallError::InvalidConfig(format!("failed to parse config json: {e}"))
        })?;
        config.validate()
    }

    #[must_use]
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            include_total: self.include_total,
            baseline_name: self.baseline_name.clone(),
        }
    }
}

pub(crate) fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic())
}
