//! Dynamic minimum rate lookup.
//!
//! This module maps the number of days until a shift to an hourly rate
//! floor and an urgency tier using the ordered bands of a [`RateTable`].

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::RateTable;
use crate::models::RateQuote;

use super::days_ahead;

/// Rounds a dollar figure to cents, half away from zero.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculates the dynamic minimum rate for a days-ahead value.
///
/// Bands are evaluated in table order and the first band containing
/// `days_ahead` wins. When no band matches the table fallback applies.
/// With the default table that covers both 15+ days and every negative
/// value, so a past-dated shift prices at the `planned` rate. Callers
/// that must not quote past dates have to guard before calling.
///
/// # Examples
///
/// ```
/// use shift_pricing::calculation::calculate_rate;
/// use shift_pricing::config::RateTable;
/// use shift_pricing::models::PricingTier;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::default();
///
/// let quote = calculate_rate(0, &table);
/// assert_eq!(quote.rate, Decimal::new(90, 0));
/// assert_eq!(quote.urgency, PricingTier::Emergency);
///
/// // 60 - (3 - 2) / 2
/// assert_eq!(calculate_rate(3, &table).rate, Decimal::new(5950, 2));
///
/// assert_eq!(calculate_rate(-1, &table).urgency, PricingTier::Planned);
/// ```
pub fn calculate_rate(days_ahead: i64, table: &RateTable) -> RateQuote {
    match table.tiers.iter().find(|band| band.contains(days_ahead)) {
        Some(band) => {
            let elapsed = Decimal::from(days_ahead - band.anchor_day);
            RateQuote {
                rate: round_cents(band.anchor_rate - elapsed * band.decrease_per_day),
                urgency: band.tier,
            }
        }
        None => RateQuote {
            rate: round_cents(table.fallback.rate),
            urgency: table.fallback.tier,
        },
    }
}

/// Calculates the dynamic minimum rate for a shift date as seen from `today`.
pub fn quote_for_date(shift_date: NaiveDate, today: NaiveDate, table: &RateTable) -> RateQuote {
    calculate_rate(days_ahead(shift_date, today), table)
}
