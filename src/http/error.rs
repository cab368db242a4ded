//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::models::SelectionError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg)),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        };
        (status, Json(error)).into_response()
    }
}

impl From<SelectionError> for AppError {
    fn from(err: SelectionError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_error_maps_to_bad_request() {
        let err: AppError = SelectionError::HourOutOfRange(42).into();
        match err {
            AppError::BadRequest(msg) => assert!(msg.contains("42")),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_api_error_body_shape() {
        let body = ApiError::new("BAD_REQUEST", "hour out of range");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], "BAD_REQUEST");
        assert!(json.get("details").is_none());
    }
}
