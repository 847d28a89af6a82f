//! Core data models for the Tariff Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod evaluation;
mod quote;
mod tariff_rule;

pub use evaluation::EvaluationConfig;
pub use quote::{CostBreakdown, CostOutcome};
pub use tariff_rule::{TariffRule, TimeWindow, VehicleCategory};
