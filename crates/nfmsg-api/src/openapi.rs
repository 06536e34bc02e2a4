//! # OpenAPI Specification Assembly
//!
//! Collects the utoipa-documented message routes into one OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the message service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "nfmsg API",
        version = "0.1.0",
        description = "Post, list, and fetch messages held in process memory.",
        license(name = "Apache-2.0")
    ),
    paths(
        crate::routes::messages::create_message,
        crate::routes::messages::list_messages,
        crate::routes::messages::get_message,
    ),
    components(schemas(
        crate::routes::messages::CreateMessageRequest,
        crate::routes::messages::MessageBody,
        crate::routes::messages::MessageResponse,
        crate::routes::messages::MessageListResponse,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "message", description = "Message board"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_lists_message_paths() {
        let spec = ApiDoc::openapi();
        assert!(spec.paths.paths.contains_key("/message/"));
        assert!(spec.paths.paths.contains_key("/message/{id}"));
    }
}
