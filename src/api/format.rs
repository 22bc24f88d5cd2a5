use rust_decimal::prelude::{Decimal, FromPrimitive, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::config::{DEFAULT_CURRENCY_CODE, NumberLocale, is_currency_code};

/// Which measure a formatter renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MeasureFormat {
    Count,
    Currency { code: String },
}

/// Renders segment values for labels and tooltips.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueFormatter {
    pub measure: MeasureFormat,
    pub locale: NumberLocale,
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::count(NumberLocale::default())
    }
}

impl ValueFormatter {
    #[must_use]
    pub fn count(locale: NumberLocale) -> Self {
        Self {
            measure: MeasureFormat::Count,
            locale,
        }
    }

    #[must_use]
    pub fn currency(code: impl Into<String>, locale: NumberLocale) -> Self {
        Self {
            measure: MeasureFormat::Currency { code: code.into() },
            locale,
        }
    }

    #[must_use]
    pub fn default_currency(locale: NumberLocale) -> Self {
        Self::currency(DEFAULT_CURRENCY_CODE, locale)
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        match &self.measure {
            MeasureFormat::Count => format_count(value, self.locale),
            MeasureFormat::Currency { code } => format_currency(value, code, self.locale),
        }
    }
}

/// Formats `value` as a grouped integer.
///
/// Values that cannot go through decimal rounding (non-finite or beyond the
/// decimal range) are returned in plain `f64` notation.
#[must_use]
pub fn format_count(value: f64, locale: NumberLocale) -> String {
    match RoundedInteger::from_f64(value) {
        Some(rounded) => rounded.render("", locale),
        None => plain_fallback(value),
    }
}

/// Formats `value` as a whole amount prefixed by the symbol for `code`.
///
/// An invalid currency code is treated like a formatting failure and yields
/// the plain `f64` notation of `value`.
#[must_use]
pub fn format_currency(value: f64, code: &str, locale: NumberLocale) -> String {
    if !is_currency_code(code) {
        return plain_fallback(value);
    }
    let Some(rounded) = RoundedInteger::from_f64(value) else {
        return plain_fallback(value);
    };
    rounded.render(&currency_prefix(code), locale)
}

fn currency_prefix(code: &str) -> String {
    let code = code.to_ascii_uppercase();
    let symbol = match code.as_str() {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "INR" => "₹",
        _ => return format!("{code}\u{a0}"),
    };
    symbol.to_owned()
}

fn plain_fallback(value: f64) -> String {
    value.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RoundedInteger {
    negative: bool,
    digits: String,
}

impl RoundedInteger {
    fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        // The shortest round-trip text keeps 1e28 as 1e28 rather than its
        // binary expansion. Text the decimal parser rejects goes through
        // `from_f64`.
        let decimal = value
            .to_string()
            .parse::<Decimal>()
            .ok()
            .or_else(|| Decimal::from_f64(value))?;
        let rounded = decimal.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let text = rounded.abs().trunc().to_string();
        let digits = text.split('.').next().unwrap_or("0").to_owned();
        Some(Self {
            negative: rounded.is_sign_negative() && !rounded.is_zero(),
            digits,
        })
    }

    fn render(&self, prefix: &str, locale: NumberLocale) -> String {
        let grouped = group_digits(&self.digits, locale);
        let mut text = String::with_capacity(1 + prefix.len() + grouped.len());
        if self.negative {
            text.push('-');
        }
        text.push_str(prefix);
        text.push_str(&grouped);
        text
    }
}

fn group_digits(digits: &str, locale: NumberLocale) -> String {
    if digits.len() < locale.min_grouping_digits() {
        return digits.to_owned();
    }
    let separator = locale.group_separator();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::{NumberLocale, RoundedInteger, group_digits};

    #[test]
    fn grouping_inserts_separator_every_three_digits() {
        assert_eq!(group_digits("1234567", NumberLocale::EnUs), "1,234,567");
        assert_eq!(group_digits("123456", NumberLocale::EnUs), "123,456");
        assert_eq!(group_digits("999", NumberLocale::EnUs), "999");
    }

    #[test]
    fn spanish_grouping_skips_four_digit_values() {
        assert_eq!(group_digits("1234", NumberLocale::EsEs), "1234");
        assert_eq!(group_digits("12345", NumberLocale::EsEs), "12.345");
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        let up = RoundedInteger::from_f64(2.5).expect("finite");
        assert_eq!(up.digits, "3");
        assert!(!up.negative);

        let down = RoundedInteger::from_f64(-2.5).expect("finite");
        assert_eq!(down.digits, "3");
        assert!(down.negative);
    }

    #[test]
    fn small_negative_values_round_to_unsigned_zero() {
        let zero = RoundedInteger::from_f64(-0.4).expect("finite");
        assert_eq!(zero.digits, "0");
        assert!(!zero.negative);
    }

    #[test]
    fn large_values_keep_their_shortest_digits() {
        let rounded = RoundedInteger::from_f64(1.0e28).expect("in decimal range");
        assert_eq!(rounded.digits, format!("1{}", "0".repeat(28)));
    }

    #[test]
    fn non_finite_values_have_no_decimal_form() {
        assert!(RoundedInteger::from_f64(f64::NAN).is_none());
        assert!(RoundedInteger::from_f64(f64::INFINITY).is_none());
    }
}
