//! Core data models for the shift pricing engine.
//!
//! This module contains the schedule input model, the quote outputs and
//! the aggregated shift calculation record.

mod quote;
mod schedule;
mod shift_calculations;

pub use quote::{PenaltyLevel, PenaltyQuote, PricingTier, RateQuote};
pub use schedule::{Schedule, ScheduleEntry};
pub use shift_calculations::{
    AuditStep, AuditTrace, AuditWarning, RateSource, ResolvedEntry, ShiftCalculations,
};
