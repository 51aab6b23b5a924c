//! Configuration types for shift pricing.
//!
//! This module contains the strongly-typed tier tables that are
//! deserialized from YAML configuration files, together with the
//! built-in defaults used when no configuration directory is supplied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{PenaltyLevel, PricingTier};

/// A single band of the dynamic rate table.
///
/// The band covers `min_days..=max_days` and prices a day inside it as
/// `anchor_rate - (days - anchor_day) * decrease_per_day`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTier {
    /// The pricing tier reported for days inside this band.
    pub tier: PricingTier,
    /// First days-ahead value covered (inclusive).
    pub min_days: i64,
    /// Last days-ahead value covered (inclusive).
    pub max_days: i64,
    /// The day the anchor rate applies to.
    pub anchor_day: i64,
    /// The hourly rate at `anchor_day`.
    pub anchor_rate: Decimal,
    /// How much the rate drops for each day past `anchor_day`.
    pub decrease_per_day: Decimal,
}

impl RateTier {
    /// Returns true if `days_ahead` falls inside this band.
    pub fn contains(&self, days_ahead: i64) -> bool {
        days_ahead >= self.min_days && days_ahead <= self.max_days
    }
}

/// The flat tier used when no band matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateFallback {
    /// The pricing tier reported for unmatched days.
    pub tier: PricingTier,
    /// The flat hourly rate.
    pub rate: Decimal,
}

/// The ordered rate table from `pricing.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// Bands evaluated in order, first match wins.
    pub tiers: Vec<RateTier>,
    /// Used for days after the last band and for negative days.
    pub fallback: RateFallback,
}

impl Default for RateTable {
    fn default() -> Self {
        let band = |tier, min_days, max_days, anchor_day, anchor_rate, decrease: Decimal| RateTier {
            tier,
            min_days,
            max_days,
            anchor_day,
            anchor_rate: Decimal::new(anchor_rate, 0),
            decrease_per_day: decrease,
        };

        Self {
            tiers: vec![
                band(PricingTier::Emergency, 0, 0, 0, 90, Decimal::ZERO),
                band(PricingTier::VeryUrgent, 1, 1, 1, 65, Decimal::ZERO),
                band(PricingTier::Urgent, 2, 2, 2, 60, Decimal::ZERO),
                band(PricingTier::ShortNotice, 3, 4, 2, 60, Decimal::new(5, 1)),
                band(PricingTier::Moderate, 5, 10, 5, 59, Decimal::new(6, 1)),
                band(PricingTier::Reasonable, 11, 14, 11, 55, Decimal::ONE),
            ],
            fallback: RateFallback {
                tier: PricingTier::Planned,
                rate: Decimal::new(50, 0),
            },
        }
    }
}

/// A single threshold of the cancellation penalty table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyTier {
    /// The penalty level reported at or above this threshold.
    pub level: PenaltyLevel,
    /// Minimum whole hours until the shift start (inclusive).
    pub min_hours: i64,
    /// The flat penalty in dollars.
    pub amount: Decimal,
}

/// The penalty applied below the lowest threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyFallback {
    /// The penalty level reported.
    pub level: PenaltyLevel,
    /// The flat penalty in dollars.
    pub amount: Decimal,
}

/// The penalty table from `penalties.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyTable {
    /// Thresholds, highest `min_hours` first.
    pub tiers: Vec<PenaltyTier>,
    /// Used below the lowest threshold, including negative hours.
    pub fallback: PenaltyFallback,
}

impl Default for PenaltyTable {
    fn default() -> Self {
        let tier = |level, min_hours, amount| PenaltyTier {
            level,
            min_hours,
            amount: Decimal::new(amount, 0),
        };

        Self {
            tiers: vec![
                tier(PenaltyLevel::None, 120, 0),
                tier(PenaltyLevel::Low, 72, 50),
                tier(PenaltyLevel::Medium, 48, 100),
                tier(PenaltyLevel::High, 24, 150),
            ],
            fallback: PenaltyFallback {
                level: PenaltyLevel::Critical,
                amount: Decimal::new(300, 0),
            },
        }
    }
}

/// How strictly schedule entries are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Shape-only checks: `2025-13-01` is accepted.
    #[default]
    Lenient,
    /// Shape checks plus real calendar dates and clock times.
    Strict,
}

/// Validation settings from `validation.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// The validation mode.
    #[serde(default)]
    pub mode: ValidationMode,
}

/// The complete pricing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    rates: RateTable,
    penalties: PenaltyTable,
    validation: ValidationConfig,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::new(
            RateTable::default(),
            PenaltyTable::default(),
            ValidationConfig::default(),
        )
    }
}

impl PricingConfig {
    /// Creates a new PricingConfig from its component parts.
    ///
    /// Penalty thresholds are sorted highest first so that evaluation
    /// order does not depend on file order. Rate bands keep file order.
    pub fn new(
        rates: RateTable,
        penalties: PenaltyTable,
        validation: ValidationConfig,
    ) -> Self {
        let mut penalties = penalties;
        penalties.tiers.sort_by(|a, b| b.min_hours.cmp(&a.min_hours));
        Self {
            rates,
            penalties,
            validation,
        }
    }

    /// Returns the rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Returns the penalty table.
    pub fn penalties(&self) -> &PenaltyTable {
        &self.penalties
    }

    /// Returns the validation mode.
    pub fn validation_mode(&self) -> ValidationMode {
        self.validation.mode
    }

    /// Checks that the tables are well formed.
    ///
    /// Rate bands must be non-empty ranges, ascending and non-overlapping.
    /// Penalty thresholds must be distinct.
    pub fn validate(&self) -> EngineResult<()> {
        let mut previous_max: Option<i64> = None;
        for band in &self.rates.tiers {
            if band.min_days > band.max_days {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "rate tier '{}' has min_days {} greater than max_days {}",
                        band.tier, band.min_days, band.max_days
                    ),
                });
            }
            if previous_max.is_some_and(|max| band.min_days <= max) {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "rate tier '{}' starting at day {} overlaps the previous tier",
                        band.tier, band.min_days
                    ),
                });
            }
            previous_max = Some(band.max_days);
        }

        for pair in self.penalties.tiers.windows(2) {
            if pair[0].min_hours == pair[1].min_hours {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "penalty tiers '{}' and '{}' share the threshold {}h",
                        pair[0].level, pair[1].level, pair[0].min_hours
                    ),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PricingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_penalty_tiers_sorted_highest_first() {
        let mut penalties = PenaltyTable::default();
        penalties.tiers.reverse();
        let config = PricingConfig::new(
            RateTable::default(),
            penalties,
            ValidationConfig::default(),
        );

        let thresholds: Vec<i64> = config.penalties().tiers.iter().map(|t| t.min_hours).collect();
        assert_eq!(thresholds, vec![120, 72, 48, 24]);
    }

    #[test]
    fn test_overlapping_rate_tiers_rejected() {
        let mut rates = RateTable::default();
        rates.tiers[1].min_days = 0;
        let config = PricingConfig::new(rates, PenaltyTable::default(), ValidationConfig::default());

        match config.validate() {
            Err(EngineError::InvalidConfig { message }) => {
                assert!(message.contains("very_urgent"));
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_rate_tier_rejected() {
        let mut rates = RateTable::default();
        rates.tiers[3].min_days = 5;
        rates.tiers[3].max_days = 3;
        let config = PricingConfig::new(rates, PenaltyTable::default(), ValidationConfig::default());

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_penalty_threshold_rejected() {
        let mut penalties = PenaltyTable::default();
        penalties.tiers[1].min_hours = 120;
        let config = PricingConfig::new(RateTable::default(), penalties, ValidationConfig::default());

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_mode_defaults_to_lenient() {
        let config: ValidationConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.mode, ValidationMode::Lenient);
    }
}
