//! Configuration loading and management for the shift pricing engine.
//!
//! This module loads the rate tier table, the cancellation penalty table
//! and the validation mode from YAML files. Every table also has a
//! built-in default so the calculators can be used without files.
//!
//! # Example
//!
//! ```no_run
//! use shift_pricing::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Fallback rate: {}", loader.config().rates().fallback.rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    PenaltyFallback, PenaltyTable, PenaltyTier, PricingConfig, RateFallback, RateTable, RateTier,
    ValidationConfig, ValidationMode,
};
