//! Error types for the shift pricing engine.
//!
//! The calculators are total and never fail. Errors only arise while
//! loading configuration and when a caller that requires a valid
//! schedule or shift start is handed one that is not.

use thiserror::Error;

/// The main error type for the shift pricing engine.
///
/// # Example
///
/// ```
/// use shift_pricing::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/pricing.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/pricing.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but the tier tables are inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the inconsistency.
        message: String,
    },

    /// A schedule failed validation.
    #[error("Invalid schedule: {}", errors.join("; "))]
    InvalidSchedule {
        /// The validation messages.
        errors: Vec<String>,
    },

    /// A shift start could not be built from its stored date and time.
    #[error("Invalid shift start '{date} {start_time}'")]
    InvalidShiftStart {
        /// The stored shift date.
        date: String,
        /// The stored shift start time.
        start_time: String,
    },

    /// A tier or level identifier did not match any known value.
    #[error("Unknown tier label: {label}")]
    UnknownLabel {
        /// The unrecognised label.
        label: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
