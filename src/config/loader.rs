//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading facility
//! configurations from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{EvaluationConfig, TariffRule, VehicleCategory};

use super::types::{FacilityConfig, FacilityMetadata, SettingsConfig, TariffsConfig};

/// Loads and provides access to facility configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides access to the tariff catalog, evaluation settings, and
/// facility metadata. Every tariff rule is validated at load time, so a
/// successful load guarantees a well-formed catalog.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/city-center/
/// ├── facility.yaml   # Facility metadata
/// ├── settings.yaml   # Evaluation settings and default rates
/// └── tariffs.yaml    # The tariff catalog
/// ```
///
/// # Example
///
/// ```no_run
/// use tariff_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/city-center").unwrap();
/// println!("Loaded facility: {}", loader.facility().name);
/// println!("Catalog size: {}", loader.catalog().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: FacilityConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/city-center")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - Any tariff rule violates its invariants (`InvalidRule`)
    /// - The evaluation settings are invalid (`InvalidGranularity`)
    ///
    /// Rules with a degenerate time window (start equal to end) load
    /// successfully but are logged as warnings, since such a window
    /// matches only its exact start instant.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load facility.yaml
        let facility_path = path.join("facility.yaml");
        let facility = Self::load_yaml::<FacilityMetadata>(&facility_path)?;

        // Load settings.yaml
        let settings_path = path.join("settings.yaml");
        let settings = Self::load_yaml::<SettingsConfig>(&settings_path)?;
        settings.evaluation.validate()?;

        // Load tariffs.yaml
        let tariffs_path = path.join("tariffs.yaml");
        let tariffs_config = Self::load_yaml::<TariffsConfig>(&tariffs_path)?;

        for rule in &tariffs_config.tariffs {
            rule.validate()?;
            if rule.window.is_degenerate() {
                warn!(
                    rule_id = %rule.id,
                    window = %rule.window,
                    "Tariff rule has a degenerate time window; it matches only its exact start instant"
                );
            }
        }

        let config = FacilityConfig::new(facility, tariffs_config.tariffs, settings);

        Ok(Self { config })
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

    /// Returns the underlying facility configuration.
    pub fn config(&self) -> &FacilityConfig {
        &self.config
    }

    /// Returns the facility metadata.
    pub fn facility(&self) -> &FacilityMetadata {
        self.config.facility()
    }

    /// Returns the tariff catalog in its original order.
    pub fn catalog(&self) -> &[TariffRule] {
        self.config.catalog()
    }

    /// Returns the evaluation parameters.
    pub fn evaluation(&self) -> &EvaluationConfig {
        self.config.evaluation()
    }

    /// Gets the flat default hourly rate for a vehicle category.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tariff_engine::config::ConfigLoader;
    /// use tariff_engine::models::VehicleCategory;
    ///
    /// let loader = ConfigLoader::load("./config/city-center")?;
    /// let rate = loader.default_hourly_rate(VehicleCategory::Car)?;
    /// println!("Default car rate: ${}/h", rate);
    /// # Ok::<(), tariff_engine::error::EngineError>(())
    /// ```
    pub fn default_hourly_rate(&self, category: VehicleCategory) -> EngineResult<Decimal> {
        self.config.default_hourly_rate(category)
    }
}
