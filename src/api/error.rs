//! API error handling for consistent JSON error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::workspace::{FlowError, StoreError};

/// API error taxonomy. Every variant converts to a JSON error body with a
/// human-readable message; nothing propagates as an uncaught fault.
#[derive(Debug)]
pub enum ApiError {
    /// Caller supplied malformed or missing input (400).
    Validation(String),
    /// Deployment is missing a required secret (500).
    Configuration(String),
    /// The external service failed or the call itself threw (500).
    Upstream(String),
    /// Unknown transcript or mode key (404).
    NotFound(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Configuration(_) | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m)
            | Self::Configuration(m)
            | Self::Upstream(m)
            | Self::NotFound(m) => m,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": true,
            "message": self.message(),
        }));
        (self.status(), body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::not_found(err.to_string())
    }
}

impl From<FlowError> for ApiError {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::NoTranscriptSelected
            | FlowError::EmptyContent
            | FlowError::EmptySummary
            | FlowError::NoRecipients => Self::validation(err.to_string()),
            FlowError::NotConfigured(_) => Self::configuration(err.to_string()),
            FlowError::Upstream(_) => Self::upstream(err.to_string()),
        }
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
