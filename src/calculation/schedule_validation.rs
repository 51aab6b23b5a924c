//! Schedule entry validation.
//!
//! Validation never fails; it returns a [`ValidationReport`] listing
//! every problem found so a form can show them all at once.

use serde::{Deserialize, Serialize};

use crate::config::ValidationMode;
use crate::models::ScheduleEntry;

use super::date_time::{is_date_shape, is_time_shape};
use super::{parse_local_date, parse_time_24};

/// The outcome of validating an entry or a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True when `errors` is empty.
    pub valid: bool,
    /// Human-readable messages, in field order.
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

fn check_time(value: &str, field: &str, mode: ValidationMode, errors: &mut Vec<String>) {
    if value.is_empty() {
        errors.push(format!("{} is required", field));
    } else if !is_time_shape(value) {
        errors.push(format!("{} must be in HH:mm format", field));
    } else if mode == ValidationMode::Strict && parse_time_24(value).is_none() {
        errors.push(format!("{} is not a valid time", field));
    }
}

/// Validates a single schedule entry.
///
/// In [`ValidationMode::Lenient`] only the shape of each field is
/// checked, so `2025-13-01` passes. [`ValidationMode::Strict`] also
/// rejects impossible dates and times. An end time earlier than the
/// start is always accepted as an overnight shift.
///
/// # Examples
///
/// ```
/// use shift_pricing::calculation::validate_schedule_item;
/// use shift_pricing::config::ValidationMode;
/// use shift_pricing::models::ScheduleEntry;
///
/// let entry = ScheduleEntry::new("2025-01-01", "09:00", "09:00");
/// let report = validate_schedule_item(&entry, ValidationMode::Lenient);
/// assert!(!report.valid);
/// assert_eq!(report.errors, vec!["End time must be different from start time"]);
/// ```
pub fn validate_schedule_item(item: &ScheduleEntry, mode: ValidationMode) -> ValidationReport {
    let mut errors = Vec::new();

    if item.date.is_empty() {
        errors.push("Date is required".to_string());
    } else if !is_date_shape(&item.date) {
        errors.push("Date must be in YYYY-MM-DD format".to_string());
    } else if mode == ValidationMode::Strict && parse_local_date(&item.date).is_none() {
        errors.push("Date is not a valid calendar date".to_string());
    }

    check_time(&item.start_time, "Start time", mode, &mut errors);
    check_time(&item.end_time, "End time", mode, &mut errors);

    if !item.start_time.is_empty() && item.start_time == item.end_time {
        errors.push("End time must be different from start time".to_string());
    }

    ValidationReport::from_errors(errors)
}

/// Validates a whole schedule.
///
/// An empty schedule is invalid. Item messages are prefixed with the
/// 1-based item number, e.g. `Item 2: Start time is required`.
pub fn validate_schedule(schedule: &[ScheduleEntry], mode: ValidationMode) -> ValidationReport {
    if schedule.is_empty() {
        return ValidationReport::from_errors(vec![
            "Schedule must contain at least one item".to_string(),
        ]);
    }

    let errors = schedule
        .iter()
        .enumerate()
        .flat_map(|(index, item)| {
            validate_schedule_item(item, mode)
                .errors
                .into_iter()
                .map(move |error| format!("Item {}: {}", index + 1, error))
        })
        .collect();

    ValidationReport::from_errors(errors)
}
