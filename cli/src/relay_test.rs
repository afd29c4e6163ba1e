use super::*;

#[test]
fn url_joins_without_double_slash() {
    let client = RelayClient::new("http://127.0.0.1:3000/", Duration::from_secs(1)).unwrap();
    assert_eq!(client.url(GENERATE_PATH), "http://127.0.0.1:3000/api/generate");
}

#[test]
fn relay_error_body_is_recognized() {
    let body = r#"{"code":"E_RATE_LIMITED","message":"per-client rate limit exceeded","retryable":true}"#;
    match classify_failure(429, body) {
        CliError::Relay { status, code, .. } => {
            assert_eq!(status, 429);
            assert_eq!(code, "E_RATE_LIMITED");
        }
        other => panic!("unexpected: {other}"),
    }
}

#[test]
fn upstream_error_message_is_extracted() {
    let body = r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#;
    match classify_failure(400, body) {
        CliError::Upstream { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "API key not valid");
        }
        other => panic!("unexpected: {other}"),
    }
}

#[test]
fn non_json_failure_keeps_truncated_body() {
    let body = "x".repeat(1000);
    match classify_failure(502, &body) {
        CliError::Upstream { message, .. } => assert_eq!(message.len(), 300),
        other => panic!("unexpected: {other}"),
    }
}

#[tokio::test]
async fn ping_unreachable_relay_is_http_error() {
    let client = RelayClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
    assert!(matches!(client.ping().await, Err(CliError::Http(_))));
}
