//! Response types for the Tariff Engine API.
//!
//! This module defines the quote response body together with the error
//! response structures and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::MatchKind;
use crate::error::EngineError;
use crate::models::{CostBreakdown, VehicleCategory};

/// Response body for a successful `/quote` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Correlation ID for this quote, echoed in logs and receipts.
    pub quote_id: Uuid,
    /// The ID of the tariff rule that priced the stay.
    pub rule_id: String,
    /// The human-readable name of the tariff rule.
    pub rule_name: String,
    /// The vehicle category that was priced.
    pub vehicle_category: VehicleCategory,
    /// Whether the rule matched by window or as the category fallback.
    pub matched_by: MatchKind,
    /// ISO 4217 code of the billing currency.
    pub currency: String,
    /// The billable amount, rounded to 2 decimal places.
    pub amount: Decimal,
    /// How the amount was derived.
    pub breakdown: CostBreakdown,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a no-tariff-available error response.
    ///
    /// "No pricing configured" is an expected operational state, not a
    /// server fault; the caller blocks check-out until rates exist.
    pub fn no_tariff_available(category: VehicleCategory) -> Self {
        Self::with_details(
            "NO_TARIFF_AVAILABLE",
            format!("No tariff available for vehicle category '{}'", category),
            "No active tariff rule is configured for this vehicle category",
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidRule { rule_id, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_RULE",
                    format!("Invalid tariff rule '{}'", rule_id),
                    message,
                ),
            },
            EngineError::InvalidDuration { minutes } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(format!(
                    "Invalid duration: {} minutes (must be non-negative)",
                    minutes
                )),
            },
            EngineError::InvalidGranularity { minutes } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid evaluation settings",
                    format!(
                        "Rounding granularity of {} minutes is not positive",
                        minutes
                    ),
                ),
            },
            EngineError::DefaultRateNotFound { category } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "DEFAULT_RATE_NOT_FOUND",
                    format!(
                        "No default hourly rate configured for vehicle category '{}'",
                        category
                    ),
                    "The facility settings do not define a flat rate for this category",
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
