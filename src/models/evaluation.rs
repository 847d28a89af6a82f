//! Evaluation configuration for cost calculation.
//!
//! This module defines the small set of evaluation-time parameters that
//! apply to every cost calculation regardless of which tariff rule was
//! resolved: the billing granularity and the grace period.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Evaluation-time parameters for cost calculation.
///
/// These values come from facility settings, not from individual tariff
/// rules. They are passed explicitly into every calculation so the engine
/// holds no hidden global state.
///
/// # Example
///
/// ```
/// use tariff_engine::models::EvaluationConfig;
///
/// let config = EvaluationConfig {
///     rounding_granularity_minutes: 15,
///     grace_minutes: 10,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Billable duration is rounded up to the next multiple of this value.
    pub rounding_granularity_minutes: u32,
    /// Stays at or below this many minutes are free.
    pub grace_minutes: u32,
}

impl EvaluationConfig {
    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if the configuration is well-formed, or
    /// [`EngineError::InvalidGranularity`] if the rounding granularity
    /// is zero.
    pub fn validate(&self) -> EngineResult<()> {
        if self.rounding_granularity_minutes == 0 {
            return Err(EngineError::InvalidGranularity {
                minutes: self.rounding_granularity_minutes,
            });
        }
        Ok(())
    }
}

impl Default for EvaluationConfig {
    /// Returns the standard facility settings: 15-minute billing
    /// granularity with a 10-minute grace period.
    fn default() -> Self {
        Self {
            rounding_granularity_minutes: 15,
            grace_minutes: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_positive_granularity() {
        let config = EvaluationConfig {
            rounding_granularity_minutes: 1,
            grace_minutes: 0,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_granularity() {
        let config = EvaluationConfig {
            rounding_granularity_minutes: 0,
            grace_minutes: 10,
        };
        let err = config.validate().unwrap_err();
        match err {
            EngineError::InvalidGranularity { minutes } => assert_eq!(minutes, 0),
            other => panic!("Expected InvalidGranularity, got {:?}", other),
        }
    }

    #[test]
    fn test_default_values() {
        let config = EvaluationConfig::default();
        assert_eq!(config.rounding_granularity_minutes, 15);
        assert_eq!(config.grace_minutes, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialization() {
        let json = r#"{ "rounding_granularity_minutes": 30, "grace_minutes": 5 }"#;
        let config: EvaluationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.rounding_granularity_minutes, 30);
        assert_eq!(config.grace_minutes, 5);
    }
}
