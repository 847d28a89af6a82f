//! Request types for the Tariff Engine API.
//!
//! This module defines the JSON request structure for the `/quote` endpoint.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::VehicleCategory;

/// Request body for the `/quote` endpoint.
///
/// Contains the information needed to price a parking stay: the vehicle
/// category and the entry and exit timestamps. The tariff rule is
/// resolved at the entry time and the billed duration is the elapsed
/// time between entry and exit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The vehicle category being priced.
    pub vehicle_category: VehicleCategory,
    /// When the vehicle entered the facility.
    pub entry_time: NaiveDateTime,
    /// When the vehicle left (or is about to leave) the facility.
    pub exit_time: NaiveDateTime,
}

impl QuoteRequest {
    /// Returns the stay duration in whole minutes.
    ///
    /// Negative when `exit_time` precedes `entry_time`; the handler
    /// rejects such requests before calling the engine.
    pub fn duration_minutes(&self) -> i64 {
        (self.exit_time - self.entry_time).num_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_quote_request() {
        let json = r#"{
            "vehicle_category": "car",
            "entry_time": "2026-01-14T09:00:00",
            "exit_time": "2026-01-14T11:10:00"
        }"#;

        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.vehicle_category, VehicleCategory::Car);
        assert_eq!(request.duration_minutes(), 130);
    }

    #[test]
    fn test_duration_spans_midnight() {
        let json = r#"{
            "vehicle_category": "car",
            "entry_time": "2026-01-14T23:30:00",
            "exit_time": "2026-01-15T01:30:00"
        }"#;

        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.duration_minutes(), 120);
    }

    #[test]
    fn test_duration_negative_when_exit_precedes_entry() {
        let json = r#"{
            "vehicle_category": "car",
            "entry_time": "2026-01-14T11:00:00",
            "exit_time": "2026-01-14T09:00:00"
        }"#;

        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.duration_minutes(), -120);
    }
}
