//! Rate and penalty quote models.
//!
//! A quote is the output of a single tier lookup: a dollar figure plus
//! the categorical label it was classified under.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The urgency tier attached to a dynamic rate.
///
/// # Example
///
/// ```
/// use shift_pricing::models::PricingTier;
///
/// let tier: PricingTier = "short_notice".parse().unwrap();
/// assert_eq!(tier, PricingTier::ShortNotice);
/// assert_eq!(tier.label(), "Short Notice");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingTier {
    /// Same-day shift.
    Emergency,
    /// Next-day shift.
    VeryUrgent,
    /// Two days out.
    Urgent,
    /// Three to four days out.
    ShortNotice,
    /// Five to ten days out.
    Moderate,
    /// Eleven to fourteen days out.
    Reasonable,
    /// Fifteen or more days out.
    Planned,
}

impl PricingTier {
    /// All tiers, most urgent first.
    pub const ALL: [PricingTier; 7] = [
        PricingTier::Emergency,
        PricingTier::VeryUrgent,
        PricingTier::Urgent,
        PricingTier::ShortNotice,
        PricingTier::Moderate,
        PricingTier::Reasonable,
        PricingTier::Planned,
    ];

    /// Returns the wire identifier, e.g. `very_urgent`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingTier::Emergency => "emergency",
            PricingTier::VeryUrgent => "very_urgent",
            PricingTier::Urgent => "urgent",
            PricingTier::ShortNotice => "short_notice",
            PricingTier::Moderate => "moderate",
            PricingTier::Reasonable => "reasonable",
            PricingTier::Planned => "planned",
        }
    }

    /// Returns the human-readable label, e.g. `Very Urgent`.
    pub fn label(&self) -> &'static str {
        match self {
            PricingTier::Emergency => "Emergency",
            PricingTier::VeryUrgent => "Very Urgent",
            PricingTier::Urgent => "Urgent",
            PricingTier::ShortNotice => "Short Notice",
            PricingTier::Moderate => "Moderate",
            PricingTier::Reasonable => "Reasonable",
            PricingTier::Planned => "Planned",
        }
    }

    /// Finds the tier whose [`label`](Self::label) matches, ignoring case.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for PricingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricingTier {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| EngineError::UnknownLabel {
                label: s.to_string(),
            })
    }
}

/// The severity attached to a cancellation penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyLevel {
    /// Five or more days notice, no fee.
    None,
    /// Three to five days notice.
    Low,
    /// Two to three days notice.
    Medium,
    /// One to two days notice.
    High,
    /// Under a day, or the shift already started.
    Critical,
}

impl PenaltyLevel {
    /// All levels, least severe first.
    pub const ALL: [PenaltyLevel; 5] = [
        PenaltyLevel::None,
        PenaltyLevel::Low,
        PenaltyLevel::Medium,
        PenaltyLevel::High,
        PenaltyLevel::Critical,
    ];

    /// Returns the wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            PenaltyLevel::None => "none",
            PenaltyLevel::Low => "low",
            PenaltyLevel::Medium => "medium",
            PenaltyLevel::High => "high",
            PenaltyLevel::Critical => "critical",
        }
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PenaltyLevel::None => "No Penalty",
            PenaltyLevel::Low => "Low",
            PenaltyLevel::Medium => "Medium",
            PenaltyLevel::High => "High",
            PenaltyLevel::Critical => "Critical",
        }
    }

    /// Finds the level whose [`label`](Self::label) matches, ignoring case.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for PenaltyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PenaltyLevel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| EngineError::UnknownLabel {
                label: s.to_string(),
            })
    }
}

/// A dynamic hourly rate and its urgency tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateQuote {
    /// Dollars per hour, rounded to cents.
    pub rate: Decimal,
    /// The tier the rate was taken from.
    pub urgency: PricingTier,
}

/// A flat cancellation fee and its severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenaltyQuote {
    /// The fee in dollars.
    pub penalty_amount: Decimal,
    /// The severity the fee was taken from.
    pub penalty_level: PenaltyLevel,
}
