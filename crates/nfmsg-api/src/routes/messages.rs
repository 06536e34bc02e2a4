//! # Message Endpoints
//!
//! | Method | Path            | Handler            |
//! |--------|-----------------|--------------------|
//! | POST   | `/message/`     | [`create_message`] |
//! | GET    | `/message/`     | [`list_messages`]  |
//! | GET    | `/message/:id`  | [`get_message`]    |
//!
//! Each path is also served without the trailing slash.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use nfmsg_core::{Message, ValidationError};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

/// Body of `POST /message/`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMessageRequest {
    pub content: String,
    pub author: String,
}

impl Validate for CreateMessageRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        nfmsg_core::message::validate_fields(&self.content, &self.author)
    }
}

/// Wire form of a stored message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    /// UUID assigned at creation.
    pub id: String,
    pub content: String,
    pub author: String,
    /// RFC 3339 creation time.
    pub time: String,
}

impl From<Message> for MessageBody {
    fn from(msg: Message) -> Self {
        Self {
            id: msg.id().to_string(),
            content: msg.content().to_string(),
            author: msg.author().to_string(),
            time: msg.time().to_string(),
        }
    }
}

/// Envelope carrying a single message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
    pub data: MessageBody,
}

/// Envelope carrying every message, oldest first.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageListResponse {
    pub message: String,
    pub data: Vec<MessageBody>,
}

/// Build the message router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/message", get(list_messages).post(create_message))
        .route("/message/", get(list_messages).post(create_message))
        .route("/message/:id", get(get_message))
}

/// POST /message/ — Post a new message.
#[utoipa::path(
    post,
    path = "/message/",
    request_body = CreateMessageRequest,
    responses(
        (status = 201, description = "Message posted", body = MessageResponse),
        (status = 400, description = "Invalid request body", body = crate::error::ErrorResponse),
    ),
    tag = "message"
)]
pub async fn create_message(
    State(state): State<AppState>,
    body: Result<Json<CreateMessageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let req = extract_validated_json(body)?;
    let message = state.messages.create(req.content, req.author)?;
    tracing::info!(id = %message.id(), author = %message.author(), "message posted");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Message posted successfully".to_string(),
            data: message.into(),
        }),
    ))
}

/// GET /message/ — List all messages in posting order.
#[utoipa::path(
    get,
    path = "/message/",
    responses(
        (status = 200, description = "All messages", body = MessageListResponse),
    ),
    tag = "message"
)]
pub async fn list_messages(State(state): State<AppState>) -> Json<MessageListResponse> {
    let data: Vec<MessageBody> = state.messages.list().into_iter().map(Into::into).collect();
    tracing::debug!(count = data.len(), "messages listed");

    Json(MessageListResponse {
        message: "Messages retrieved successfully".to_string(),
        data,
    })
}

/// GET /message/:id — Fetch one message by id.
#[utoipa::path(
    get,
    path = "/message/{id}",
    params(("id" = String, Path, description = "Message ID")),
    responses(
        (status = 200, description = "Message found", body = MessageResponse),
        (status = 400, description = "Message ID is required", body = crate::error::ErrorResponse),
        (status = 404, description = "Message not found", body = crate::error::ErrorResponse),
    ),
    tag = "message"
)]
pub async fn get_message(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    // An undecodable segment cannot name a stored message.
    let Path(id) = id.map_err(|err| ApiError::NotFound(err.body_text()))?;
    let message = state.messages.get_by_id(&id)?;
    tracing::debug!(id = %id, "message found");

    Ok(Json(MessageResponse {
        message: "Message found".to_string(),
        data: message.into(),
    }))
}
