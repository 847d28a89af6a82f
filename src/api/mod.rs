//! HTTP API module for the Tariff Engine.
//!
//! This module provides the REST API endpoint for quoting parking stays
//! against the facility's tariff catalog.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::QuoteRequest;
pub use response::{ApiError, QuoteResponse};
pub use state::AppState;
