//! Unified error types for the triage API
//!
//! This module defines error types for each layer:
//! - `ScoringError`: the one scoring failure that is user-visible
//! - `ModelError`: primary inference backend failures, always recovered
//!   locally by falling back to a heuristic
//! - `MediaError`: per-item media decoding failures, recovered within the
//!   batch
//! - `AppError`: application layer errors (wraps scoring errors for HTTP
//!   responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Scoring pipeline errors surfaced to the caller.
///
/// Everything else that can go wrong inside the pipeline degrades to a
/// fallback score instead of erroring.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("no text or media provided for analysis")]
    NoContent,
}

/// Primary inference backend errors. Never cross the pipeline boundary;
/// the owning scorer logs and falls back.
// Constructed by backend adapters; this crate ships only test stubs.
#[allow(dead_code)]
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model unavailable: {0}")]
    Unavailable(String),

    #[error("inference failed: {0}")]
    Inference(String),

    /// Surfaced by adapters that enforce their own deadlines
    #[error("inference timed out")]
    Timeout,
}

/// Per-item media errors. Recovered inside the batch scorer; a failed item
/// yields a bounded fallback score and processing continues.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("media file not found: {0}")]
    NotFound(String),

    #[error("could not decode media: {0}")]
    Undecodable(#[from] image::ImageError),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Scoring(#[from] ScoringError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Scoring(ScoringError::NoContent) => (
                StatusCode::BAD_REQUEST,
                "No text or media provided for analysis",
                None,
            ),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Upload(msg) => {
                tracing::error!("Upload error: {}", msg);
                (StatusCode::BAD_REQUEST, "Upload failed", Some(msg.clone()))
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_content_maps_to_bad_request() {
        let response = AppError::from(ScoringError::NoContent).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_hides_details() {
        let response = AppError::Internal("db on fire".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
