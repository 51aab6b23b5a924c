//! Application state for the shift pricing API.

use std::sync::Arc;

use crate::config::{ConfigLoader, PricingConfig};

/// Shared application state.
///
/// Holds the loaded tier tables, shared read-only across handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the pricing configuration.
    pub fn config(&self) -> &PricingConfig {
        self.config.config()
    }
}
