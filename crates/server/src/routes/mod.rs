//! API route handlers
//!
//! This module contains all HTTP endpoint implementations for the jobmatch
//! server. Routes are organized by functionality:
//!
//! - `health`: Health checks, readiness, and metrics
//! - `ai`: Public skill extraction and two-list matching
//! - `users`: Authenticated skill extraction for profile editing
//! - `jobs`: Ranked job listings for one candidate

pub mod ai;
pub mod health;
pub mod jobs;
pub mod users;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /) and requires no authentication.
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "jobmatch server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/ai/extract",
            "/ai/match",
            "/users/extract-skills",
            "/jobs/match-scores",
            "/health",
            "/ready",
            "/metrics"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
