//! Error types for the Tariff Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during tariff resolution and
//! cost calculation.

use thiserror::Error;

/// The main error type for the Tariff Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use tariff_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// A tariff rule violated one of its invariants.
    #[error("Invalid tariff rule '{rule_id}': {message}")]
    InvalidRule {
        /// The ID of the invalid rule.
        rule_id: String,
        /// A description of what made the rule invalid.
        message: String,
    },

    /// A stay duration was negative.
    #[error("Invalid duration: {minutes} minutes (must be non-negative)")]
    InvalidDuration {
        /// The offending duration in minutes.
        minutes: i64,
    },

    /// The rounding granularity was not a positive number of minutes.
    #[error("Invalid rounding granularity: {minutes} minutes (must be positive)")]
    InvalidGranularity {
        /// The offending granularity in minutes.
        minutes: u32,
    },

    /// No default hourly rate is configured for a vehicle category.
    #[error("No default hourly rate configured for vehicle category '{category}'")]
    DefaultRateNotFound {
        /// The vehicle category that has no default rate.
        category: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_rule_displays_id_and_message() {
        let error = EngineError::InvalidRule {
            rule_id: "tariff_001".to_string(),
            message: "maximum charge below minimum charge".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid tariff rule 'tariff_001': maximum charge below minimum charge"
        );
    }

    #[test]
    fn test_invalid_duration_displays_minutes() {
        let error = EngineError::InvalidDuration { minutes: -30 };
        assert_eq!(
            error.to_string(),
            "Invalid duration: -30 minutes (must be non-negative)"
        );
    }

    #[test]
    fn test_invalid_granularity_displays_minutes() {
        let error = EngineError::InvalidGranularity { minutes: 0 };
        assert_eq!(
            error.to_string(),
            "Invalid rounding granularity: 0 minutes (must be positive)"
        );
    }

    #[test]
    fn test_default_rate_not_found_displays_category() {
        let error = EngineError::DefaultRateNotFound {
            category: "truck".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No default hourly rate configured for vehicle category 'truck'"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "negative amount calculated".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Calculation error: negative amount calculated"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_duration() -> EngineResult<()> {
            Err(EngineError::InvalidDuration { minutes: -1 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_duration()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
