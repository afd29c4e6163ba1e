//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The relay exposes one forwarding endpoint plus two read-only status endpoints. CORS
//! is wide open: the relay holds no user data, and the credential it guards
//! never leaves the server.

pub mod generate;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use wire::relay::{GENERATE_PATH, HEALTH_PATH, INFO_PATH};

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let body_limit = DefaultBodyLimit::max(state.max_body_bytes);

    Router::new()
        .route(GENERATE_PATH, post(generate::generate))
        .route(INFO_PATH, get(generate::info))
        .route(HEALTH_PATH, get(healthz))
        .layer(body_limit)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
