//! Shift calculation result models.
//!
//! This module contains the [`ShiftCalculations`] type written back onto a
//! shift posting, the per-entry [`ResolvedEntry`] breakdown, and the audit
//! trace that records how each rate was chosen.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PricingTier, ScheduleEntry};

/// Where an entry's effective rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// The platform-computed minimum for the entry date.
    Dynamic,
    /// An employer-set rate at or above the minimum.
    Manual,
}

/// A schedule entry with its computed hours and resolved rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEntry {
    /// The entry as submitted, with `hourly_rate` replaced by the effective rate.
    #[serde(flatten)]
    pub entry: ScheduleEntry,
    /// Hours worked; zero when a time was missing.
    pub hours: Decimal,
    /// Whether the entry counted towards hour and pay totals.
    pub counted: bool,
    /// Days between today and the entry date.
    pub days_ahead: i64,
    /// The dynamic minimum rate for the entry date.
    pub dynamic_minimum: Decimal,
    /// The rate actually applied.
    pub effective_rate: Decimal,
    /// Where the applied rate came from.
    pub rate_source: RateSource,
    /// `effective_rate * hours`.
    pub pay: Decimal,
}

/// A single step in the audit trace recording a pricing decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag entries that were partly ignored without aborting
/// the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The ordered steps.
    pub steps: Vec<AuditStep>,
    /// Warnings raised along the way.
    pub warnings: Vec<AuditWarning>,
}

/// Computed pricing fields for a shift posting.
///
/// An empty schedule produces zero totals with no tier or days-ahead.
///
/// # Example
///
/// ```
/// use shift_pricing::models::ShiftCalculations;
/// use rust_decimal::Decimal;
///
/// let empty = ShiftCalculations::default();
/// assert_eq!(empty.total_pay, Decimal::ZERO);
/// assert!(empty.pricing_tier.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShiftCalculations {
    /// The highest effective rate across all entries.
    pub hourly_rate: Decimal,
    /// The tier of the earliest entry date.
    pub pricing_tier: Option<PricingTier>,
    /// Days until the earliest entry date.
    pub days_ahead: Option<i64>,
    /// Total hours across counted entries, unrounded.
    pub total_hours: Decimal,
    /// Total pay across counted entries, rounded to cents.
    pub total_pay: Decimal,
    /// Per-entry breakdown in schedule order.
    pub schedule: Vec<ResolvedEntry>,
    /// How the figures were reached.
    pub audit_trace: AuditTrace,
}
