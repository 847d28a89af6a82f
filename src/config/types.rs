//! Configuration types for the Tariff Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{EvaluationConfig, TariffRule, VehicleCategory};

/// Metadata about the parking facility.
///
/// Contains identifying information about the facility a tariff catalog
/// belongs to, including its code, name, billing currency, and timezone.
#[derive(Debug, Clone, Deserialize)]
pub struct FacilityMetadata {
    /// The facility code (e.g., "city-center").
    pub code: String,
    /// The human-readable name of the facility.
    pub name: String,
    /// ISO 4217 code of the billing currency.
    pub currency: String,
    /// IANA timezone name the facility operates in.
    pub timezone: String,
}

/// Facility settings file structure.
///
/// Carries the evaluation parameters applied to every calculation and
/// the flat default hourly rates used by the surrounding application
/// when dynamic pricing is not in effect.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsConfig {
    /// Evaluation-time parameters (granularity and grace period).
    pub evaluation: EvaluationConfig,
    /// Flat default hourly rate per vehicle category.
    pub default_hourly_rates: HashMap<VehicleCategory, Decimal>,
}

/// Tariff catalog file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TariffsConfig {
    /// The tariff rules, in catalog order.
    pub tariffs: Vec<TariffRule>,
}

/// The complete facility configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in a facility configuration directory. The catalog keeps
/// its file order; resolution tie-breaking depends on it.
#[derive(Debug, Clone)]
pub struct FacilityConfig {
    /// Facility metadata.
    facility: FacilityMetadata,
    /// The tariff catalog, in file order.
    catalog: Vec<TariffRule>,
    /// Evaluation-time parameters.
    evaluation: EvaluationConfig,
    /// Flat default hourly rate per vehicle category.
    default_hourly_rates: HashMap<VehicleCategory, Decimal>,
}

impl FacilityConfig {
    /// Creates a new FacilityConfig from its component parts.
    pub fn new(
        facility: FacilityMetadata,
        catalog: Vec<TariffRule>,
        settings: SettingsConfig,
    ) -> Self {
        Self {
            facility,
            catalog,
            evaluation: settings.evaluation,
            default_hourly_rates: settings.default_hourly_rates,
        }
    }

    /// Returns the facility metadata.
    pub fn facility(&self) -> &FacilityMetadata {
        &self.facility
    }

    /// Returns the tariff catalog in its original order.
    pub fn catalog(&self) -> &[TariffRule] {
        &self.catalog
    }

    /// Returns the evaluation parameters.
    pub fn evaluation(&self) -> &EvaluationConfig {
        &self.evaluation
    }

    /// Gets the flat default hourly rate for a vehicle category.
    ///
    /// This rate is the injected non-dynamic fallback for the surrounding
    /// application; the cost calculator itself never reads it.
    ///
    /// # Returns
    ///
    /// Returns the rate, or [`EngineError::DefaultRateNotFound`] when no
    /// default is configured for the category.
    pub fn default_hourly_rate(&self, category: VehicleCategory) -> EngineResult<Decimal> {
        self.default_hourly_rates
            .get(&category)
            .copied()
            .ok_or_else(|| EngineError::DefaultRateNotFound {
                category: category.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_config() -> FacilityConfig {
        let facility = FacilityMetadata {
            code: "city-center".to_string(),
            name: "City Center Parking".to_string(),
            currency: "USD".to_string(),
            timezone: "America/New_York".to_string(),
        };

        let mut default_hourly_rates = HashMap::new();
        default_hourly_rates.insert(VehicleCategory::Car, dec("4.00"));
        default_hourly_rates.insert(VehicleCategory::Motorcycle, dec("2.00"));

        let settings = SettingsConfig {
            evaluation: EvaluationConfig {
                rounding_granularity_minutes: 15,
                grace_minutes: 10,
            },
            default_hourly_rates,
        };

        FacilityConfig::new(facility, vec![], settings)
    }

    #[test]
    fn test_default_hourly_rate_lookup() {
        let config = make_config();
        assert_eq!(
            config.default_hourly_rate(VehicleCategory::Car).unwrap(),
            dec("4.00")
        );
    }

    #[test]
    fn test_default_hourly_rate_missing_category() {
        let config = make_config();
        let result = config.default_hourly_rate(VehicleCategory::Truck);
        match result.unwrap_err() {
            EngineError::DefaultRateNotFound { category } => {
                assert_eq!(category, "truck");
            }
            other => panic!("Expected DefaultRateNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_settings_deserialization() {
        let yaml = r#"
evaluation:
  rounding_granularity_minutes: 30
  grace_minutes: 5
default_hourly_rates:
  car: "4.00"
  truck: "7.00"
"#;
        let settings: SettingsConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.evaluation.rounding_granularity_minutes, 30);
        assert_eq!(
            settings.default_hourly_rates[&VehicleCategory::Truck],
            dec("7.00")
        );
    }

    #[test]
    fn test_tariffs_deserialization() {
        let yaml = r#"
tariffs:
  - id: tariff_car_day
    name: Weekday daytime car rate
    vehicle_category: car
    window:
      start: "06:00:00"
      end: "22:00:00"
    active_weekdays: [1, 2, 3, 4, 5]
    first_hour_rate: "5.00"
    additional_hour_rate: "3.00"
    minimum_charge: "2.50"
    maximum_charge: "30.00"
    priority: 10
"#;
        let config: TariffsConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.tariffs.len(), 1);
        let rule = &config.tariffs[0];
        assert_eq!(rule.id, "tariff_car_day");
        assert!(rule.is_active);
        assert_eq!(rule.maximum_charge, Some(dec("30.00")));
        assert!(!rule.window.spans_midnight());
    }
}
