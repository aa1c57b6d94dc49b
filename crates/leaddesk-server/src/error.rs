//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] implements `axum::response::IntoResponse` to produce
//! structured JSON error bodies. Malformed query parameters are NOT errors
//! here -- they degrade to defaults inside `leaddesk_core::query`; the only
//! failures this API surfaces are protocol-level ones.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Structured error detail in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., "METHOD_NOT_ALLOWED").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The endpoint only serves GET and OPTIONS (405).
    #[error("method not allowed")]
    MethodNotAllowed,

    /// The authorization policy denied the request (403).
    #[error("forbidden: {0}")]
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ApiErrorDetail {
                    code: "METHOD_NOT_ALLOWED".to_string(),
                    message: "only GET and OPTIONS are supported".to_string(),
                },
            ),
            ApiError::Forbidden(msg) => (
                StatusCode::FORBIDDEN,
                ApiErrorDetail {
                    code: "FORBIDDEN".to_string(),
                    message: msg.clone(),
                },
            ),
        };

        let body = serde_json::json!({
            "success": false,
            "error": detail,
        });

        let mut response = (status, axum::Json(body)).into_response();
        if matches!(self, ApiError::MethodNotAllowed) {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("GET, OPTIONS"));
        }
        response
    }
}
