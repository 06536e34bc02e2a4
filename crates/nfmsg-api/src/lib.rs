//! # nfmsg-api — Axum API Service for nfmsg
//!
//! A small network function that keeps posted messages in process memory.
//!
//! ## API Surface
//!
//! | Prefix          | Module                 | Domain          |
//! |-----------------|------------------------|-----------------|
//! | `/message/*`    | [`routes::messages`]   | Messages        |
//! | `/openapi.json` | [`openapi`]            | API description |
//! | `/health/*`     | this module            | Probes          |
//!
//! ## Response Envelope
//!
//! Success: `{"message": string, "data": ...}`.
//! Failure: `{"message": string, "error": string}`.

pub mod config;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::State;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::messages::router())
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .with_state(state);

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — the store is in memory, so ready as soon as we serve.
async fn readiness(State(state): State<AppState>) -> &'static str {
    tracing::debug!(
        nf = %state.config.configuration.nf_name,
        messages = state.messages.len(),
        "readiness probe"
    );
    "ready"
}
