//! Presentation helpers.
//!
//! The typed parsers in [`super::date_time`] return `Option`. The `safe_*`
//! functions here are the presentation edge where a missing value turns
//! into a fallback string. Rate and penalty labels round-trip: parsing a
//! formatted label gives back the quote it came from.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::models::{PenaltyLevel, PenaltyQuote, PricingTier, RateQuote};

use super::date_time::{
    DEFAULT_DATE_PATTERN, DEFAULT_DATE_TIME_PATTERN, DEFAULT_TIME_PATTERN, format_date,
    format_date_time, format_time,
};
use super::round_cents;

/// Fallback shown when a stored value cannot be formatted.
pub const DEFAULT_FALLBACK: &str = "N/A";

/// Options for the `safe_*` formatters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// chrono pattern; `None` uses the formatter's default.
    pub pattern: Option<String>,
    /// Returned when the value is missing or does not parse.
    pub fallback: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            pattern: None,
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

impl FormatOptions {
    /// Options with a custom pattern and the default fallback.
    pub fn with_pattern(pattern: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            ..Self::default()
        }
    }

    fn pattern_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.pattern.as_deref().unwrap_or(default)
    }
}

/// Formats a stored value as a date, or returns the fallback.
///
/// ```
/// use shift_pricing::calculation::{safe_date, FormatOptions};
/// use serde_json::json;
///
/// let options = FormatOptions::default();
/// assert_eq!(safe_date(&json!("2025-11-29"), &options), "Nov 29, 2025");
/// assert_eq!(safe_date(&json!(null), &options), "N/A");
/// ```
pub fn safe_date(value: &Value, options: &FormatOptions) -> String {
    format_date(value, options.pattern_or(DEFAULT_DATE_PATTERN))
        .unwrap_or_else(|| options.fallback.clone())
}

/// Formats a stored value as a time, or returns the fallback.
pub fn safe_time(value: &Value, options: &FormatOptions) -> String {
    format_time(value, options.pattern_or(DEFAULT_TIME_PATTERN))
        .unwrap_or_else(|| options.fallback.clone())
}

/// Formats a stored value as a date and time, or returns the fallback.
pub fn safe_date_time(value: &Value, options: &FormatOptions) -> String {
    format_date_time(value, options.pattern_or(DEFAULT_DATE_TIME_PATTERN))
        .unwrap_or_else(|| options.fallback.clone())
}

/// Formats a rate quote, e.g. `$59.50/hr (Short Notice)`.
pub fn format_rate(quote: &RateQuote) -> String {
    format!("${:.2}/hr ({})", round_cents(quote.rate), quote.urgency.label())
}

/// Formats a penalty quote, e.g. `$150.00 (High)`.
pub fn format_penalty(quote: &PenaltyQuote) -> String {
    format!(
        "${:.2} ({})",
        round_cents(quote.penalty_amount),
        quote.penalty_level.label()
    )
}

/// Splits `$<amount><suffix> (<label>)` into its amount and label.
fn split_label<'a>(s: &'a str, suffix: &str) -> Option<(Decimal, &'a str)> {
    let s = s.trim().strip_prefix('$')?;
    let (amount, rest) = s.split_once(' ')?;
    let amount = amount.strip_suffix(suffix)?;
    let label = rest.trim().strip_prefix('(')?.strip_suffix(')')?;
    Some((Decimal::from_str(amount).ok()?, label))
}

/// Parses a label produced by [`format_rate`].
pub fn parse_rate_label(s: &str) -> Option<RateQuote> {
    let (rate, label) = split_label(s, "/hr")?;
    Some(RateQuote {
        rate,
        urgency: PricingTier::from_label(label)?,
    })
}

/// Parses a label produced by [`format_penalty`].
pub fn parse_penalty_label(s: &str) -> Option<PenaltyQuote> {
    let (amount, label) = split_label(s, "")?;
    Some(PenaltyQuote {
        penalty_amount: amount,
        penalty_level: PenaltyLevel::from_label(label)?,
    })
}
