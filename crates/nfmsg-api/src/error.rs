//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps store errors to HTTP status codes and the `{"message", "error"}`
//! envelope. Every error is terminal for the request it occurs in.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use nfmsg_core::{StoreError, ValidationError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Error envelope returned for every failed request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable summary, e.g. "Message not found".
    pub message: String,
    /// Detail of what went wrong.
    pub error: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Body was not valid JSON, or a required field was missing or empty (400).
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The id path segment was empty (400).
    #[error("message id is required")]
    MissingId,

    /// No message with the given id (404).
    #[error("message {0} not found")]
    NotFound(String),
}

impl ApiError {
    /// HTTP status and envelope `message` for this error.
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidBody(_) => (StatusCode::BAD_REQUEST, "Invalid request body"),
            Self::MissingId => (StatusCode::BAD_REQUEST, "Message ID is required"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "Message not found"),
        }
    }

    /// Envelope `error` text for this error.
    fn detail(&self) -> String {
        match self {
            Self::InvalidBody(detail) => detail.clone(),
            Self::MissingId => "No message ID provided in URL path".to_string(),
            Self::NotFound(_) => "No message found with the specified ID".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        tracing::warn!(status = status.as_u16(), error = %self, "request rejected");

        let body = ErrorResponse {
            message: message.to_string(),
            error: self.detail(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyId => Self::MissingId,
            other => Self::InvalidBody(other.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(v) => v.into(),
            StoreError::NotFound { id } => Self::NotFound(id),
        }
    }
}
