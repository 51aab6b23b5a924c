//! Calculation logic for the shift pricing engine.
//!
//! This module contains the dynamic rate lookup, per-entry hours,
//! schedule aggregation, cancellation penalties, schedule validation,
//! and the date/time normalization and display helpers they rely on.
//! Every calculation is a pure function of its inputs.

mod cancellation_penalty;
mod date_time;
mod display;
mod rate_tier;
mod schedule_hours;
mod schedule_validation;
mod shift_totals;

pub use cancellation_penalty::{CancellationQuote, calculate_penalty, quote_cancellation};
pub use date_time::{
    DEFAULT_DATE_PATTERN, DEFAULT_DATE_TIME_PATTERN, DEFAULT_TIME_PATTERN, clock_minutes,
    days_ahead, format_date, format_date_time, format_time, format_time_12_hour, hours_until,
    parse_date_value, parse_local_date, parse_local_date_or_today, parse_rollover_date,
    parse_time_12_hour, parse_time_24, shift_start, to_24_hour,
};
pub use display::{
    DEFAULT_FALLBACK, FormatOptions, format_penalty, format_rate, parse_penalty_label,
    parse_rate_label, safe_date, safe_date_time, safe_time,
};
pub use rate_tier::{calculate_rate, quote_for_date, round_cents};
pub use schedule_hours::{clock_hours, entry_hours, schedule_entry_hours};
pub use schedule_validation::{ValidationReport, validate_schedule, validate_schedule_item};
pub use shift_totals::{build_shift_calculations, calculate_validated_shift};
