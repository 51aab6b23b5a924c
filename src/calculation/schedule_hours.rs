//! Hours worked for a single schedule entry.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::models::ScheduleEntry;

use super::clock_minutes;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Calculates the hours between a start and end time.
///
/// An end earlier than the start crosses midnight and has 24 hours
/// added, so it is never negative. Equal times give zero.
///
/// # Examples
///
/// ```
/// use shift_pricing::calculation::entry_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
/// assert_eq!(entry_hours(start, end), Decimal::new(8, 0));
/// ```
pub fn entry_hours(start: NaiveTime, end: NaiveTime) -> Decimal {
    clock_hours(minute_of_day(start), minute_of_day(end))
}

fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour() * 60 + time.minute())
}

/// Hours between two clock readings given as minutes since midnight.
///
/// Readings are not range checked: `24:00` is 1440. A negative span has
/// 24 hours added once.
pub fn clock_hours(start_minutes: i64, end_minutes: i64) -> Decimal {
    let mut minutes = end_minutes - start_minutes;
    if minutes < 0 {
        minutes += MINUTES_PER_DAY;
    }
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// Hours for an entry, or `None` if either time is missing or not `HH:mm`.
///
/// Hours come from the written digits, so any time the lenient validator
/// accepts is priced. `18:00` to `24:00` is six hours.
pub fn schedule_entry_hours(entry: &ScheduleEntry) -> Option<Decimal> {
    Some(clock_hours(
        clock_minutes(&entry.start_time)?,
        clock_minutes(&entry.end_time)?,
    ))
}
