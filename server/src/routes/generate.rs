//! `POST /api/generate`: forward a `generateContent` call upstream.

use std::net::SocketAddr;
use std::time::Instant;

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use wire::GenerateContentRequest;
use wire::relay::InfoResponse;

use crate::error::RelayError;
use crate::state::AppState;
use crate::upstream::UpstreamReply;

/// `POST /api/generate`: validate, rate limit, then relay the body verbatim.
///
/// The body is parsed only to reject obviously bad requests; the original
/// bytes are what goes upstream, so fields the wire types do not model
/// still reach the API.
pub async fn generate(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, RelayError> {
    let Some(upstream) = state.upstream.clone() else {
        return Err(RelayError::NotConfigured);
    };

    let body = body.map_err(|rejection| body_error(&rejection, state.max_body_bytes))?;
    let parts = validate_body(&body)?;
    state.rate_limiter.check_and_record(peer.ip())?;

    let started = Instant::now();
    let reply = upstream.generate(body).await?;
    tracing::info!(
        client = %peer.ip(),
        model = upstream.model(),
        parts,
        status = reply.status,
        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "relayed generate request"
    );

    Ok(forward(reply))
}

/// `GET /api/info`: which model the relay targets and whether it can.
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse { model: state.model.clone(), configured: state.upstream.is_some() })
}

/// Parse just enough to reject empty or malformed requests. Returns the part count.
fn validate_body(body: &[u8]) -> Result<usize, RelayError> {
    let request: GenerateContentRequest =
        serde_json::from_slice(body).map_err(|e| RelayError::InvalidBody(e.to_string()))?;
    let parts = request.part_count();
    if parts == 0 {
        return Err(RelayError::EmptyRequest);
    }
    Ok(parts)
}

/// Axum's body rejections are plain text; re-issue them as relay errors.
fn body_error(rejection: &BytesRejection, limit: usize) -> RelayError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        RelayError::PayloadTooLarge { limit }
    } else {
        RelayError::InvalidBody(rejection.body_text())
    }
}

fn forward(reply: UpstreamReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, [(CONTENT_TYPE, "application/json")], reply.body).into_response()
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
