//! Configuration loading and management for the Tariff Engine.
//!
//! This module provides functionality to load facility configurations from
//! YAML files, including facility metadata, evaluation settings, default
//! hourly rates, and the tariff catalog.
//!
//! # Example
//!
//! ```no_run
//! use tariff_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/city-center").unwrap();
//! println!("Loaded facility: {}", config.facility().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{FacilityConfig, FacilityMetadata, SettingsConfig, TariffsConfig};
