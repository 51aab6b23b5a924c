//! Cancellation penalty calculation.
//!
//! A pharmacist withdrawing from an accepted shift pays a flat fee that
//! grows as the shift start approaches.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::PenaltyTable;
use crate::error::{EngineError, EngineResult};
use crate::models::PenaltyQuote;

use super::{hours_until, shift_start};

/// A penalty quote together with the notice it was based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationQuote {
    /// The penalty.
    #[serde(flatten)]
    pub penalty: PenaltyQuote,
    /// Whole hours between the request and the shift start, floored.
    pub hours_until_shift: i64,
}

/// Calculates the penalty for cancelling `hours_until_shift` hours ahead.
///
/// Thresholds are evaluated from highest to lowest and the first one
/// at or below `hours_until_shift` wins. Below the lowest threshold the
/// table fallback applies. With the default table a negative value,
/// meaning the shift already started, takes the `critical` penalty.
///
/// # Examples
///
/// ```
/// use shift_pricing::calculation::calculate_penalty;
/// use shift_pricing::config::PenaltyTable;
/// use shift_pricing::models::PenaltyLevel;
/// use rust_decimal::Decimal;
///
/// let table = PenaltyTable::default();
/// assert_eq!(calculate_penalty(120, &table).penalty_amount, Decimal::ZERO);
/// assert_eq!(calculate_penalty(47, &table).penalty_level, PenaltyLevel::High);
/// assert_eq!(calculate_penalty(-3, &table).penalty_level, PenaltyLevel::Critical);
/// ```
pub fn calculate_penalty(hours_until_shift: i64, table: &PenaltyTable) -> PenaltyQuote {
    match table
        .tiers
        .iter()
        .find(|tier| hours_until_shift >= tier.min_hours)
    {
        Some(tier) => PenaltyQuote {
            penalty_amount: tier.amount,
            penalty_level: tier.level,
        },
        None => PenaltyQuote {
            penalty_amount: table.fallback.amount,
            penalty_level: table.fallback.level,
        },
    }
}

/// Quotes the penalty for cancelling a stored shift at `now`.
///
/// `shift_date` and `start_time` are the stored `YYYY-MM-DD` and
/// `HH:mm` strings. Returns an error if they do not form a valid start.
pub fn quote_cancellation(
    shift_date: &str,
    start_time: &str,
    now: NaiveDateTime,
    table: &PenaltyTable,
) -> EngineResult<CancellationQuote> {
    let start = shift_start(shift_date, start_time).ok_or_else(|| {
        EngineError::InvalidShiftStart {
            date: shift_date.to_string(),
            start_time: start_time.to_string(),
        }
    })?;

    let hours_until_shift = hours_until(start, now);
    Ok(CancellationQuote {
        penalty: calculate_penalty(hours_until_shift, table),
        hours_until_shift,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PenaltyLevel;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn penalty(hours: i64) -> PenaltyQuote {
        calculate_penalty(hours, &PenaltyTable::default())
    }

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    /// CP-001: tier boundaries
    #[test]
    fn test_tier_boundaries() {
        let cases = [
            (500, 0, PenaltyLevel::None),
            (120, 0, PenaltyLevel::None),
            (119, 50, PenaltyLevel::Low),
            (72, 50, PenaltyLevel::Low),
            (71, 100, PenaltyLevel::Medium),
            (48, 100, PenaltyLevel::Medium),
            (47, 150, PenaltyLevel::High),
            (24, 150, PenaltyLevel::High),
            (23, 300, PenaltyLevel::Critical),
            (0, 300, PenaltyLevel::Critical),
        ];

        for (hours, amount, level) in cases {
            let quote = penalty(hours);
            assert_eq!(quote.penalty_amount, Decimal::new(amount, 0), "hours {}", hours);
            assert_eq!(quote.penalty_level, level, "hours {}", hours);
        }
    }

    /// CP-002: already-started shifts take the critical penalty
    #[test]
    fn test_negative_hours_are_critical() {
        assert_eq!(penalty(-1).penalty_level, PenaltyLevel::Critical);
        assert_eq!(penalty(-1000).penalty_amount, Decimal::new(300, 0));
    }

    #[test]
    fn test_quote_cancellation_floors_hours() {
        // 47h 59m before the start
        let now = make_datetime("2026-01-13 09:01:00");
        let quote = quote_cancellation("2026-01-15", "09:00", now, &PenaltyTable::default()).unwrap();

        assert_eq!(quote.hours_until_shift, 47);
        assert_eq!(quote.penalty.penalty_level, PenaltyLevel::High);
    }

    #[test]
    fn test_quote_cancellation_after_start() {
        let now = make_datetime("2026-01-15 09:30:00");
        let quote = quote_cancellation("2026-01-15", "09:00", now, &PenaltyTable::default()).unwrap();

        assert_eq!(quote.hours_until_shift, -1);
        assert_eq!(quote.penalty.penalty_amount, Decimal::new(300, 0));
    }

    #[test]
    fn test_quote_cancellation_invalid_start() {
        let now = make_datetime("2026-01-13 09:00:00");
        match quote_cancellation("2026-01-15", "", now, &PenaltyTable::default()) {
            Err(EngineError::InvalidShiftStart { date, .. }) => assert_eq!(date, "2026-01-15"),
            other => panic!("Expected InvalidShiftStart, got {:?}", other),
        }
    }

    #[test]
    fn test_cancellation_quote_serialization() {
        let quote = CancellationQuote {
            penalty: penalty(30),
            hours_until_shift: 30,
        };
        let json = serde_json::to_value(quote).unwrap();
        assert_eq!(json["penaltyAmount"], "150");
        assert_eq!(json["penaltyLevel"], "high");
        assert_eq!(json["hoursUntilShift"], 30);
    }

    proptest! {
        #[test]
        fn prop_penalty_never_decreases_as_start_nears(hours in -200i64..500) {
            prop_assert!(penalty(hours).penalty_amount >= penalty(hours + 1).penalty_amount);
        }

        #[test]
        fn prop_penalty_is_total(hours in any::<i64>()) {
            let quote = penalty(hours);
            prop_assert!(quote.penalty_amount >= Decimal::ZERO);
            prop_assert!(quote.penalty_amount <= Decimal::new(300, 0));
        }
    }
}
