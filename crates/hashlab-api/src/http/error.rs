//! Application error type mapping to HTTP status codes.
//!
//! The wire format is a flat `{"error": "<message>"}` object: 400 with a
//! descriptive message for validation failures, 500 with a generic message
//! for anything unexpected.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use hashlab_types::error::ValidationError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Missing or empty request field.
    Validation(String),
    /// Generic internal error.
    Internal(String),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!(%msg, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = json!({ "error": message });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
