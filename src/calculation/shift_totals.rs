//! Schedule aggregation.
//!
//! This module turns a multi-date schedule into the pricing fields stored
//! on a shift posting: per-entry effective rates, total hours, total pay,
//! and the headline rate and tier.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::{PricingConfig, RateTable};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, RateSource, ResolvedEntry, ScheduleEntry,
    ShiftCalculations,
};

use super::{
    calculate_rate, days_ahead, parse_rollover_date, round_cents, schedule_entry_hours,
    validate_schedule,
};

/// Builds the shift-level pricing fields for a schedule.
///
/// For each entry the dynamic minimum is looked up from the entry's own
/// date. A manual rate is honoured only when it is at least that
/// minimum, so employers can raise but never lower the floor. Entries
/// with a missing or malformed time count towards neither hours nor pay.
/// Hours are read from the written digits, so `24:00` is a valid end.
/// A date with an out-of-range month or day rolls over into the next
/// period (`2026-13-01` prices as 2027-01-01). Only a date that is not
/// `YYYY-MM-DD` at all is priced as if dated `today`. `total_pay` is
/// rounded to cents; `total_hours` is kept exact.
///
/// The headline `hourly_rate` is the highest effective rate across
/// entries; `days_ahead` and `pricing_tier` come from the
/// lexicographically earliest non-empty date. An empty schedule yields
/// zero totals and no tier.
///
/// The result depends only on `(schedule, today, table)`.
///
/// # Examples
///
/// ```
/// use shift_pricing::calculation::build_shift_calculations;
/// use shift_pricing::config::RateTable;
/// use shift_pricing::models::{PricingTier, ScheduleEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let schedule = vec![ScheduleEntry::new("2026-01-15", "09:00", "17:00")];
///
/// let result = build_shift_calculations(&schedule, today, &RateTable::default());
/// assert_eq!(result.total_hours, Decimal::new(8, 0));
/// assert_eq!(result.total_pay, Decimal::new(720, 0));
/// assert_eq!(result.pricing_tier, Some(PricingTier::Emergency));
/// ```
pub fn build_shift_calculations(
    schedule: &[ScheduleEntry],
    today: NaiveDate,
    table: &RateTable,
) -> ShiftCalculations {
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let mut resolved: Vec<ResolvedEntry> = Vec::with_capacity(schedule.len());

    for (index, entry) in schedule.iter().enumerate() {
        let item = index + 1;

        let entry_date = match (entry.parsed_date(), parse_rollover_date(&entry.date)) {
            (Some(date), _) => date,
            (None, Some(rolled)) => {
                warnings.push(AuditWarning {
                    code: "ROLLED_OVER_DATE".to_string(),
                    message: format!(
                        "Item {}: date '{}' is not a calendar date, priced as {}",
                        item, entry.date, rolled
                    ),
                    severity: "low".to_string(),
                });
                rolled
            }
            (None, None) => {
                warnings.push(AuditWarning {
                    code: "UNPARSEABLE_DATE".to_string(),
                    message: format!(
                        "Item {}: date '{}' did not parse, priced as {}",
                        item, entry.date, today
                    ),
                    severity: "medium".to_string(),
                });
                today
            }
        };
        let entry_days = days_ahead(entry_date, today);
        let minimum = calculate_rate(entry_days, table);

        let (effective_rate, rate_source) = match entry.manual_rate() {
            Some(manual) if manual >= minimum.rate => (manual, RateSource::Manual),
            _ => (minimum.rate, RateSource::Dynamic),
        };

        let hours = schedule_entry_hours(entry);
        if hours.is_none() {
            warnings.push(AuditWarning {
                code: "MISSING_TIME".to_string(),
                message: format!(
                    "Item {}: start '{}' or end '{}' missing, excluded from totals",
                    item, entry.start_time, entry.end_time
                ),
                severity: "low".to_string(),
            });
        }
        let counted = hours.is_some();
        let hours = hours.unwrap_or(Decimal::ZERO);
        let pay = effective_rate * hours;

        let reasoning = match (rate_source, entry.manual_rate()) {
            (RateSource::Manual, _) => format!(
                "Manual rate ${} meets the {} minimum of ${}",
                effective_rate, minimum.urgency, minimum.rate
            ),
            (RateSource::Dynamic, Some(manual)) => format!(
                "Manual rate ${} is below the {} minimum of ${}; minimum applied",
                manual, minimum.urgency, minimum.rate
            ),
            (RateSource::Dynamic, None) => format!(
                "{} day(s) ahead: {} rate ${}",
                entry_days, minimum.urgency, minimum.rate
            ),
        };

        steps.push(AuditStep {
            step_number,
            rule_id: "entry_rate_floor".to_string(),
            rule_name: "Entry Rate Floor".to_string(),
            input: serde_json::json!({
                "item": item,
                "date": entry.date,
                "days_ahead": entry_days,
                "manual_rate": entry.manual_rate().map(|r| r.to_string()),
            }),
            output: serde_json::json!({
                "dynamic_minimum": minimum.rate.to_string(),
                "effective_rate": effective_rate.to_string(),
                "source": rate_source,
                "hours": hours.normalize().to_string(),
            }),
            reasoning,
        });
        step_number += 1;

        let mut stored = entry.clone();
        stored.hourly_rate = Some(effective_rate);

        resolved.push(ResolvedEntry {
            entry: stored,
            hours,
            counted,
            days_ahead: entry_days,
            dynamic_minimum: minimum.rate,
            effective_rate,
            rate_source,
            pay,
        });
    }

    let total_hours: Decimal = resolved.iter().map(|r| r.hours).sum();
    let total_pay = round_cents(resolved.iter().map(|r| r.pay).sum());
    let hourly_rate = resolved
        .iter()
        .map(|r| r.effective_rate)
        .max()
        .unwrap_or(Decimal::ZERO);

    let earliest = schedule
        .iter()
        .map(|e| e.date.as_str())
        .filter(|d| !d.is_empty())
        .min();

    let (shift_days, pricing_tier) = match earliest {
        Some(date) => {
            let shift_date = parse_rollover_date(date).unwrap_or(today);
            let shift_days = days_ahead(shift_date, today);
            let quote = calculate_rate(shift_days, table);

            steps.push(AuditStep {
                step_number,
                rule_id: "shift_pricing_tier".to_string(),
                rule_name: "Shift Pricing Tier".to_string(),
                input: serde_json::json!({
                    "earliest_date": date,
                    "days_ahead": shift_days,
                }),
                output: serde_json::json!({
                    "pricing_tier": quote.urgency,
                    "hourly_rate": hourly_rate.to_string(),
                    "total_hours": total_hours.to_string(),
                    "total_pay": total_pay.to_string(),
                }),
                reasoning: format!(
                    "Earliest date {} is {} day(s) ahead ({}); headline rate ${} is the highest entry rate",
                    date, shift_days, quote.urgency, hourly_rate
                ),
            });

            (Some(shift_days), Some(quote.urgency))
        }
        None => (None, None),
    };

    ShiftCalculations {
        hourly_rate,
        pricing_tier,
        days_ahead: shift_days,
        total_hours,
        total_pay,
        schedule: resolved,
        audit_trace: AuditTrace { steps, warnings },
    }
}

/// Validates a schedule and, if valid, builds its pricing fields.
///
/// This is the create/edit path of a shift posting: invalid schedules
/// are rejected with every validation message rather than priced.
pub fn calculate_validated_shift(
    schedule: &[ScheduleEntry],
    today: NaiveDate,
    config: &PricingConfig,
) -> EngineResult<ShiftCalculations> {
    let report = validate_schedule(schedule, config.validation_mode());
    if !report.valid {
        return Err(EngineError::InvalidSchedule {
            errors: report.errors,
        });
    }

    Ok(build_shift_calculations(schedule, today, config.rates()))
}
