//! Request types for the shift pricing API.
//!
//! `today` and `now` are optional on every request. When omitted the
//! server's local clock is used; supplying them makes a quote
//! reproducible.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::ScheduleEntry;

/// Request body for `POST /rates/quote`.
///
/// Exactly one of `days_ahead` or `shift_date` is expected; `days_ahead`
/// wins if both are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateQuoteRequest {
    /// Days until the shift.
    #[serde(default)]
    pub days_ahead: Option<i64>,
    /// The shift date as `YYYY-MM-DD`.
    #[serde(default)]
    pub shift_date: Option<String>,
    /// The date to measure from.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Request body for `POST /schedules/validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleValidationRequest {
    /// The schedule entries to check.
    pub schedule: Vec<ScheduleEntry>,
}

/// Request body for `POST /shifts/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftCalculationRequest {
    /// The schedule entries to price.
    pub schedule: Vec<ScheduleEntry>,
    /// The date to measure from.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Request body for `POST /cancellations/quote`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationRequest {
    /// The stored shift date as `YYYY-MM-DD`.
    pub shift_date: String,
    /// The stored shift start time as `HH:mm`.
    pub start_time: String,
    /// The moment the cancellation is requested.
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
}
