//! Schedule entry model.
//!
//! Entries keep the raw strings submitted by the posting form so that
//! validation can report on malformed values. Parsed views are exposed
//! through accessors that return `None` instead of failing.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{clock_minutes, parse_local_date, parse_time_24};

/// One dated block of a shift posting.
///
/// # Examples
///
/// ```
/// use shift_pricing::models::ScheduleEntry;
///
/// let entry = ScheduleEntry::new("2026-01-15", "22:00", "06:00");
/// assert!(entry.parsed_date().is_some());
/// assert!(entry.crosses_midnight());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// The shift date as `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// The start time as `HH:mm`.
    #[serde(default)]
    pub start_time: String,
    /// The end time as `HH:mm`. Earlier than the start means overnight.
    #[serde(default)]
    pub end_time: String,
    /// The employer-entered rate, if any.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Whether `hourly_rate` was set by hand rather than suggested.
    #[serde(default)]
    pub is_manual_rate: bool,
}

/// An ordered shift schedule; the first entry is the primary date.
pub type Schedule = Vec<ScheduleEntry>;

impl ScheduleEntry {
    /// Creates an entry that uses the dynamic rate.
    pub fn new(
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            hourly_rate: None,
            is_manual_rate: false,
        }
    }

    /// Sets a manual rate on the entry.
    pub fn with_manual_rate(mut self, rate: Decimal) -> Self {
        self.hourly_rate = Some(rate);
        self.is_manual_rate = true;
        self
    }

    /// Returns the entry date, if it parses.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_local_date(&self.date)
    }

    /// Returns the start time, if it parses.
    pub fn parsed_start(&self) -> Option<NaiveTime> {
        parse_time_24(&self.start_time)
    }

    /// Returns the end time, if it parses.
    pub fn parsed_end(&self) -> Option<NaiveTime> {
        parse_time_24(&self.end_time)
    }

    /// Returns the manual rate when the manual flag is set.
    pub fn manual_rate(&self) -> Option<Decimal> {
        if self.is_manual_rate {
            self.hourly_rate
        } else {
            None
        }
    }

    /// Returns true if the end time is earlier than the start time.
    pub fn crosses_midnight(&self) -> bool {
        matches!(
            (clock_minutes(&self.start_time), clock_minutes(&self.end_time)),
            (Some(start), Some(end)) if end < start
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_form_payload() {
        let json = r#"{
            "date": "2026-01-15",
            "start_time": "09:00",
            "end_time": "17:00",
            "hourly_rate": "72.50",
            "is_manual_rate": true
        }"#;

        let entry: ScheduleEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.manual_rate(), Some(Decimal::new(7250, 2)));
        assert_eq!(
            entry.parsed_date(),
            NaiveDate::from_ymd_opt(2026, 1, 15)
        );
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let entry: ScheduleEntry = serde_json::from_str(r#"{"date": "2026-01-15"}"#).unwrap();
        assert!(entry.start_time.is_empty());
        assert!(entry.parsed_start().is_none());
        assert!(!entry.is_manual_rate);
    }

    #[test]
    fn test_rate_without_manual_flag_is_not_manual() {
        let mut entry = ScheduleEntry::new("2026-01-15", "09:00", "17:00");
        entry.hourly_rate = Some(Decimal::new(80, 0));
        assert_eq!(entry.manual_rate(), None);
    }

    #[test]
    fn test_crosses_midnight() {
        assert!(ScheduleEntry::new("2026-01-15", "22:00", "06:00").crosses_midnight());
        assert!(!ScheduleEntry::new("2026-01-15", "09:00", "17:00").crosses_midnight());
        assert!(!ScheduleEntry::new("2026-01-15", "", "06:00").crosses_midnight());
    }
}
