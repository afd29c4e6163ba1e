use super::*;

#[test]
fn not_configured_is_service_unavailable() {
    let err = RelayError::NotConfigured;
    assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(err.error_code(), "E_NOT_CONFIGURED");
    assert!(!err.retryable());
}

#[test]
fn rate_limited_is_retryable_429() {
    let err = RelayError::from(RateLimitError::GlobalExceeded { limit: 1, window_secs: 60 });
    assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);
    let body = err.to_body();
    assert_eq!(body.code, "E_RATE_LIMITED");
    assert!(body.retryable);
    assert!(body.message.contains("global rate limit"));
}

#[test]
fn upstream_transport_failure_is_bad_gateway() {
    let err = RelayError::from(UpstreamError::Request("connection refused".into()));
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(err.error_code(), "E_UPSTREAM_REQUEST");
    assert!(err.retryable());
}

#[test]
fn bad_requests_are_400_and_final() {
    for err in [RelayError::EmptyRequest, RelayError::InvalidBody("eof".into())] {
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(!err.retryable());
    }
}

#[tokio::test]
async fn into_response_renders_json_body() {
    let response = RelayError::EmptyRequest.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.code, "E_EMPTY_REQUEST");
}

#[test]
fn oversized_body_is_413_and_final() {
    let err = RelayError::PayloadTooLarge { limit: 16 };
    assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(err.error_code(), "E_PAYLOAD_TOO_LARGE");
    assert!(!err.retryable());
    assert_eq!(err.to_string(), "request body exceeds 16 bytes");
}
