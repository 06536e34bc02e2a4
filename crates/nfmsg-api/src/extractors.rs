//! # Request Extraction & Validation
//!
//! Provides the [`Validate`] trait for request DTOs and helpers that turn
//! axum JSON rejections into the 400 "Invalid request body" envelope.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use nfmsg_core::ValidationError;

use crate::error::ApiError;

/// Request types that check required fields beyond what serde enforces.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Extract a JSON body, mapping deserialization errors to [`ApiError::InvalidBody`].
///
/// Handlers take the body as `Result<Json<T>, JsonRejection>` so that the
/// rejection reaches this function instead of axum's default plain-text
/// response.
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| ApiError::InvalidBody(err.body_text()))
}

/// Extract a JSON body and validate it using the [`Validate`] trait.
pub fn extract_validated_json<T: Validate>(
    result: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiError> {
    let value = extract_json(result)?;
    value.validate()?;
    Ok(value)
}
