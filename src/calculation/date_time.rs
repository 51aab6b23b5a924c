//! Date and time normalization.
//!
//! Stored shift dates are calendar dates, not instants. Parsing them into
//! [`NaiveDate`] keeps the year, month and day exactly as written, so a
//! `2025-11-29` shift can never render as the 28th in a timezone behind
//! UTC. Every parser here returns `Option`; fallbacks such as "today" or
//! `"N/A"` are applied by the caller.

use std::fmt::Write;

use chrono::{DateTime, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

/// Date pattern used by [`format_date`] callers that have no preference.
pub const DEFAULT_DATE_PATTERN: &str = "%b %-d, %Y";
/// Time pattern used by [`format_time`] callers that have no preference.
pub const DEFAULT_TIME_PATTERN: &str = "%-I:%M %p";
/// Date-time pattern used by [`format_date_time`] callers that have no preference.
pub const DEFAULT_DATE_TIME_PATTERN: &str = "%b %-d, %Y %-I:%M %p";

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Returns true if `s` has the shape `dddd-dd-dd`.
pub(crate) fn is_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Returns true if `s` has the shape `dd:dd`.
pub(crate) fn is_time_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 5
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}

/// Parses the leading `YYYY-MM-DD` of a string as a calendar date.
///
/// Anything after the first ten characters is ignored, so ISO timestamps
/// such as `2025-11-29T00:00:00Z` yield the written date rather than a
/// UTC-shifted one. Returns `None` for missing, malformed or impossible
/// dates.
///
/// # Examples
///
/// ```
/// use shift_pricing::calculation::parse_local_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_local_date("2025-11-29"), NaiveDate::from_ymd_opt(2025, 11, 29));
/// assert_eq!(parse_local_date("2025-11-29T00:00:00Z"), NaiveDate::from_ymd_opt(2025, 11, 29));
/// assert_eq!(parse_local_date("2025-13-01"), None);
/// assert_eq!(parse_local_date(""), None);
/// ```
pub fn parse_local_date(s: &str) -> Option<NaiveDate> {
    let prefix = s.trim().get(..10)?;
    if !is_date_shape(prefix) {
        return None;
    }

    let year = prefix[0..4].parse().ok()?;
    let month = prefix[5..7].parse().ok()?;
    let day = prefix[8..10].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Resolves a `YYYY-MM-DD` date, rolling out-of-range components forward.
///
/// A real calendar date resolves to itself. A month past 12 or a day past
/// the end of the month carries into the following year or month, and a
/// zero month or day steps back one. Returns `None` for anything that is
/// not `YYYY-MM-DD` shaped.
///
/// ```
/// use shift_pricing::calculation::parse_rollover_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_rollover_date("2026-13-01"), NaiveDate::from_ymd_opt(2027, 1, 1));
/// assert_eq!(parse_rollover_date("2025-02-30"), NaiveDate::from_ymd_opt(2025, 3, 2));
/// assert_eq!(parse_rollover_date("2025-11-29"), NaiveDate::from_ymd_opt(2025, 11, 29));
/// assert_eq!(parse_rollover_date("11/29/2025"), None);
/// ```
pub fn parse_rollover_date(s: &str) -> Option<NaiveDate> {
    let prefix = s.trim().get(..10)?;
    if !is_date_shape(prefix) {
        return None;
    }

    let year: i32 = prefix[0..4].parse().ok()?;
    let month: u32 = prefix[5..7].parse().ok()?;
    let day: i64 = prefix[8..10].parse().ok()?;

    let january = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let month_start = if month == 0 {
        january.checked_sub_months(Months::new(1))?
    } else {
        january.checked_add_months(Months::new(month - 1))?
    };
    month_start.checked_add_signed(Duration::days(day - 1))
}

/// Parses a date, falling back to `today` when it does not parse.
pub fn parse_local_date_or_today(s: &str, today: NaiveDate) -> NaiveDate {
    parse_local_date(s).unwrap_or(today)
}

/// Parses a 24-hour `HH:mm` time.
pub fn parse_time_24(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}

/// Parses a 12-hour time such as `9:30 PM` or `12:05 am`.
pub fn parse_time_12_hour(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(&s.trim().to_ascii_uppercase(), "%I:%M %p").ok()
}

/// Minutes since midnight read from the `HH:mm` digits.
///
/// Only the shape is checked, so `24:00` is 1440 and `25:00` is 1500.
///
/// ```
/// use shift_pricing::calculation::clock_minutes;
///
/// assert_eq!(clock_minutes("09:30"), Some(570));
/// assert_eq!(clock_minutes("24:00"), Some(1440));
/// assert_eq!(clock_minutes("9:30"), None);
/// ```
pub fn clock_minutes(s: &str) -> Option<i64> {
    let s = s.trim();
    if !is_time_shape(s) {
        return None;
    }

    let hours: i64 = s[0..2].parse().ok()?;
    let minutes: i64 = s[3..5].parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Converts a 12-hour time to `HH:mm`.
///
/// ```
/// use shift_pricing::calculation::to_24_hour;
///
/// assert_eq!(to_24_hour("9:30 PM").as_deref(), Some("21:30"));
/// assert_eq!(to_24_hour("12:00 AM").as_deref(), Some("00:00"));
/// assert_eq!(to_24_hour("25:00 PM"), None);
/// ```
pub fn to_24_hour(s: &str) -> Option<String> {
    parse_time_12_hour(s).map(|t| t.format("%H:%M").to_string())
}

/// Formats an `HH:mm` time as `h:mm AM/PM`.
///
/// Input that does not parse is returned unchanged.
///
/// ```
/// use shift_pricing::calculation::format_time_12_hour;
///
/// assert_eq!(format_time_12_hour("13:05"), "1:05 PM");
/// assert_eq!(format_time_12_hour("00:00"), "12:00 AM");
/// assert_eq!(format_time_12_hour("noon"), "noon");
/// assert_eq!(format_time_12_hour(""), "");
/// ```
pub fn format_time_12_hour(time_24: &str) -> String {
    match parse_time_24(time_24) {
        Some(time) => time.format("%-I:%M %p").to_string(),
        None => time_24.to_string(),
    }
}

/// Whole calendar days from `today` to `shift_date`.
///
/// Negative for past dates.
pub fn days_ahead(shift_date: NaiveDate, today: NaiveDate) -> i64 {
    (shift_date - today).num_days()
}

/// Combines a stored shift date and `HH:mm` start time.
pub fn shift_start(date: &str, start_time: &str) -> Option<NaiveDateTime> {
    Some(parse_local_date(date)?.and_time(parse_time_24(start_time)?))
}

/// Whole hours from `now` until `start`, floored.
///
/// Thirty minutes after the start is `-1`, not `0`.
pub fn hours_until(start: NaiveDateTime, now: NaiveDateTime) -> i64 {
    (start - now).num_seconds().div_euclid(3600)
}

/// Interprets a loosely typed stored value as a local date-time.
///
/// Accepts ISO strings with or without an offset, bare dates (midnight),
/// and epoch milliseconds. `null`, empty strings and anything else yield
/// `None`.
pub fn parse_date_value(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => parse_date_time_str(s.trim()),
        Value::Number(n) => {
            let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            DateTime::from_timestamp_millis(millis).map(|dt| dt.with_timezone(&Local).naive_local())
        }
        _ => None,
    }
}

fn parse_date_time_str(s: &str) -> Option<NaiveDateTime> {
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .or_else(|| {
            if s.len() == 10 {
                parse_local_date(s).and_then(|date| date.and_hms_opt(0, 0, 0))
            } else {
                None
            }
        })
}

/// Formats with a chrono pattern, returning `None` for a bad pattern.
fn format_with(item: impl std::fmt::Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", item).ok()?;
    Some(out)
}

/// Formats the date part of a stored value.
pub fn format_date(value: &Value, pattern: &str) -> Option<String> {
    let dt = parse_date_value(value)?;
    format_with(dt.date().format(pattern))
}

/// Formats the time part of a stored value.
///
/// A bare `HH:mm` string is accepted as well as full date-times.
pub fn format_time(value: &Value, pattern: &str) -> Option<String> {
    let time = match value {
        Value::String(s) if parse_time_24(s).is_some() => parse_time_24(s)?,
        _ => parse_date_value(value)?.time(),
    };
    format_with(time.format(pattern))
}

/// Formats a stored value as a date and time.
pub fn format_date_time(value: &Value, pattern: &str) -> Option<String> {
    let dt = parse_date_value(value)?;
    format_with(dt.format(pattern))
}
