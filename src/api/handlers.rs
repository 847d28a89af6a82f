//! HTTP request handlers for the Tariff Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_cost, resolve_tariff};

use super::request::QuoteRequest;
use super::response::{ApiError, ApiErrorResponse, QuoteResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(quote_handler))
        .with_state(state)
}

/// Handler for POST /quote endpoint.
///
/// Resolves the applicable tariff rule at the entry time and returns the
/// billable amount for the stay together with a calculation breakdown.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let quote_id = Uuid::new_v4();
    info!(quote_id = %quote_id, "Processing quote request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        quote_id = %quote_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        quote_id = %quote_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let total_minutes = request.duration_minutes();
    if total_minutes < 0 {
        warn!(
            quote_id = %quote_id,
            entry_time = %request.entry_time,
            exit_time = %request.exit_time,
            "Exit time precedes entry time"
        );
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::validation_error(
                "exit_time must not be before entry_time",
            )),
        )
            .into_response();
    }

    let config = state.config();

    // Resolve the tariff at the entry instant
    let Some(resolved) = resolve_tariff(config.catalog(), request.vehicle_category, request.entry_time)
    else {
        warn!(
            quote_id = %quote_id,
            vehicle_category = %request.vehicle_category,
            "No tariff available"
        );
        return (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::no_tariff_available(request.vehicle_category)),
        )
            .into_response();
    };

    // Perform the calculation
    let start_time = Instant::now();
    match calculate_cost(resolved.rule, total_minutes, config.evaluation()) {
        Ok(outcome) => {
            let duration = start_time.elapsed();
            info!(
                quote_id = %quote_id,
                rule_id = %resolved.rule.id,
                matched_by = %resolved.match_kind,
                amount = %outcome.amount,
                total_minutes,
                duration_us = duration.as_micros(),
                "Quote completed successfully"
            );
            let response = QuoteResponse {
                quote_id,
                rule_id: resolved.rule.id.clone(),
                rule_name: resolved.rule.name.clone(),
                vehicle_category: request.vehicle_category,
                matched_by: resolved.match_kind,
                currency: config.facility().currency.clone(),
                amount: outcome.amount,
                breakdown: outcome.breakdown,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                quote_id = %quote_id,
                error = %err,
                "Quote calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
