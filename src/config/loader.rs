//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pricing
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{PenaltyTable, PricingConfig, RateTable, ValidationConfig, ValidationMode};

/// Loads and provides access to pricing configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── pricing.yaml     # Dynamic rate tiers
/// ├── penalties.yaml   # Cancellation penalty tiers
/// └── validation.yaml  # Schedule validation mode (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_pricing::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("{} rate tiers", loader.config().rates().tiers.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PricingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `pricing.yaml` or `penalties.yaml` is missing,
    /// if any file contains invalid YAML, or if the loaded tables fail
    /// [`PricingConfig::validate`]. A missing `validation.yaml` selects
    /// lenient validation.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rates = Self::load_yaml::<RateTable>(&path.join("pricing.yaml"))?;
        let penalties = Self::load_yaml::<PenaltyTable>(&path.join("penalties.yaml"))?;

        let validation_path = path.join("validation.yaml");
        let validation = if validation_path.exists() {
            Self::load_yaml::<ValidationConfig>(&validation_path)?
        } else {
            ValidationConfig::default()
        };

        let config = PricingConfig::new(rates, penalties, validation);
        config.validate()?;

        debug!(
            path = %path.display(),
            rate_tiers = config.rates().tiers.len(),
            penalty_tiers = config.penalties().tiers.len(),
            "Loaded pricing configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying pricing configuration.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Returns the configured validation mode.
    pub fn validation_mode(&self) -> ValidationMode {
        self.config.validation_mode()
    }
}
