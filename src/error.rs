//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` enum for all error conditions and implements Axum's
//! `IntoResponse` to automatically convert errors to appropriate HTTP responses
//! with JSON error bodies.
//!
//! Error mappings:
//! - `FetchFailure`, `Request`, `Body` → 502
//! - `Internal` → 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Upstream returned {0}")]
    FetchFailure(reqwest::StatusCode),

    #[error("Upstream request failed: {source}")]
    Request { source: reqwest::Error },

    #[error("Upstream body unreadable: {source}")]
    Body { source: reqwest::Error },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::FetchFailure(upstream) => (
                StatusCode::BAD_GATEWAY,
                format!("Upstream returned {}", upstream),
            ),
            AppError::Request { source } => (
                StatusCode::BAD_GATEWAY,
                format!("Upstream request failed: {}", source),
            ),
            AppError::Body { source } => (
                StatusCode::BAD_GATEWAY,
                format!("Upstream body unreadable: {}", source),
            ),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
