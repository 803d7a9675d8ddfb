//! REST API v1 endpoints
//!
//! ```text
//! /api/v1/
//! ├── health                      GET     Health check
//! ├── platforms                   GET     Preset catalog
//! └── usage/{platform}            GET     Rust snippet for a badge
//! ```

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use featured_badges_core::{presets, usage, Error};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, error, instrument, warn};

use super::badges::BadgeQuery;
use crate::state::AppState;

/// Standard API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: ApiErrorDetails,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorDetails {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ApiErrorDetails {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }

    pub fn not_found(message: impl Into<String>) -> (StatusCode, Json<Self>) {
        (StatusCode::NOT_FOUND, Json(Self::new("NOT_FOUND", message)))
    }

    pub fn bad_request(message: impl Into<String>) -> (StatusCode, Json<Self>) {
        (
            StatusCode::BAD_REQUEST,
            Json(Self::new("BAD_REQUEST", message)),
        )
    }

    pub fn unprocessable(message: impl Into<String>) -> (StatusCode, Json<Self>) {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(Self::new("UNPROCESSABLE", message)),
        )
    }

    pub fn internal_error(message: impl Into<String>) -> (StatusCode, Json<Self>) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(Self::new("INTERNAL_ERROR", message)),
        )
    }

    /// Map a badge library error to its HTTP response
    pub fn from_badge_error(err: Error) -> (StatusCode, Json<Self>) {
        match err {
            Error::UnknownPlatform(_) => {
                warn!(error = %err, "Unknown platform requested");
                Self::not_found(err.to_string())
            }
            Error::InvalidDisplayMode(_) | Error::InvalidDimension(_) => {
                warn!(error = %err, "Rejected badge options");
                Self::bad_request(err.to_string())
            }
            Error::MissingCount => {
                warn!(error = %err, "Rejected badge options");
                Self::unprocessable(err.to_string())
            }
            Error::ConfigError(_) | Error::SerializationError(_) => {
                error!(error = %err, "Badge request failed");
                Self::internal_error(err.to_string())
            }
        }
    }
}

/// Create API router
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/platforms", get(list_platforms))
        .route("/usage/{platform}", get(usage_snippet))
}

/// Health check endpoint
#[instrument]
async fn health_check() -> impl IntoResponse {
    debug!("Health check requested");
    Json(json!({
        "status": "ok",
        "service": "featured-badges",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// List every platform preset
#[instrument]
async fn list_platforms() -> impl IntoResponse {
    Json(json!({ "platforms": presets::catalog() }))
}

/// Rust snippet reproducing the requested badge
#[instrument(skip(state))]
async fn usage_snippet(
    State(state): State<AppState>,
    Path(platform): Path<String>,
    Query(query): Query<BadgeQuery>,
) -> Result<impl IntoResponse, (StatusCode, Json<ApiError>)> {
    let (target, options) = query
        .resolve(&platform, &state.config)
        .map_err(ApiError::from_badge_error)?;

    Ok(Json(json!({ "code": usage::snippet(&target, &options) })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope() {
        let (status, Json(body)) = ApiError::not_found("Platform not found");
        assert_eq!(status, StatusCode::NOT_FOUND);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "success": false,
                "error": { "code": "NOT_FOUND", "message": "Platform not found" }
            })
        );
    }

    #[test]
    fn test_badge_error_status() {
        let cases = [
            (Error::UnknownPlatform("myspace".into()), StatusCode::NOT_FOUND),
            (Error::InvalidDisplayMode("x".into()), StatusCode::BAD_REQUEST),
            (Error::InvalidDimension("abc".into()), StatusCode::BAD_REQUEST),
            (Error::MissingCount, StatusCode::UNPROCESSABLE_ENTITY),
            (Error::ConfigError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            let (status, _) = ApiError::from_badge_error(err);
            assert_eq!(status, expected);
        }
    }
}
