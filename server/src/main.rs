mod config;
mod error;
mod rate_limit;
mod routes;
mod state;
mod upstream;

use std::net::SocketAddr;
use std::sync::Arc;

use upstream::{GeminiClient, Upstream};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let config = config::ServerConfig::from_env();

    // Non-fatal: the relay still serves /healthz and /api/info without a key.
    let upstream: Option<Arc<dyn Upstream>> = match GeminiClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "upstream client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "upstream not configured, generate requests will be refused");
            None
        }
    };
    let model = upstream
        .as_ref()
        .map_or_else(upstream::config::model_from_env, |u| u.model().to_owned());

    let limiter = rate_limit::RateLimiter::new();
    let limits = limiter.config();
    tracing::info!(
        per_client = limits.per_client_limit,
        per_client_window_secs = limits.per_client_window.as_secs(),
        global = limits.global_limit,
        global_window_secs = limits.global_window.as_secs(),
        "rate limits configured"
    );

    let state = state::AppState::new(upstream, model, limiter).with_max_body_bytes(config.max_body_bytes);

    let app = routes::app(state);
    let listen_addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .expect("failed to bind");

    tracing::info!(%listen_addr, max_body_bytes = config.max_body_bytes, "retouch relay listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}
