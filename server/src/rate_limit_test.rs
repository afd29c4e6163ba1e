use super::*;
use std::net::{Ipv4Addr, Ipv6Addr};

const PER_CLIENT: usize = 3;
const GLOBAL: usize = 5;
const WINDOW: Duration = Duration::from_secs(60);

fn limiter() -> RateLimiter {
    RateLimiter::with_config(RateLimitConfig {
        per_client_limit: PER_CLIENT,
        per_client_window: WINDOW,
        global_limit: GLOBAL,
        global_window: WINDOW,
    })
}

fn ip(last: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(10, 0, 0, last))
}

#[test]
fn per_client_allows_up_to_limit() {
    let rl = limiter();
    let now = Instant::now();

    for i in 0..PER_CLIENT {
        assert!(rl.check_and_record_at(ip(1), now).is_ok(), "request {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at(ip(1), now),
        Err(RateLimitError::PerClientExceeded { limit: PER_CLIENT, window_secs: 60 })
    ));
}

#[test]
fn global_allows_up_to_limit() {
    let rl = limiter();
    let now = Instant::now();

    // Distinct clients so the per-client limit never trips first.
    for i in 0..GLOBAL {
        assert!(rl.check_and_record_at(ip(i as u8), now).is_ok(), "request {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at(ip(200), now),
        Err(RateLimitError::GlobalExceeded { .. })
    ));
}

#[test]
fn window_expiry_allows_new_requests() {
    let rl = limiter();
    let start = Instant::now();

    for _ in 0..PER_CLIENT {
        rl.check_and_record_at(ip(1), start).unwrap();
    }
    assert!(rl.check_and_record_at(ip(1), start).is_err());

    let after_window = start + WINDOW + Duration::from_millis(1);
    assert!(rl.check_and_record_at(ip(1), after_window).is_ok());
}

#[test]
fn distinct_clients_do_not_interfere() {
    let rl = limiter();
    let v6 = IpAddr::V6(Ipv6Addr::LOCALHOST);
    let now = Instant::now();

    for _ in 0..PER_CLIENT {
        rl.check_and_record_at(ip(1), now).unwrap();
    }
    assert!(rl.check_and_record_at(ip(1), now).is_err());
    assert!(rl.check_and_record_at(v6, now).is_ok());
}

#[test]
fn rejected_request_is_not_recorded() {
    let rl = limiter();
    let now = Instant::now();

    for _ in 0..PER_CLIENT {
        rl.check_and_record_at(ip(1), now).unwrap();
    }
    // Rejections must not eat into the global budget.
    for _ in 0..10 {
        assert!(rl.check_and_record_at(ip(1), now).is_err());
    }
    assert!(rl.check_and_record_at(ip(2), now).is_ok());
    assert!(rl.check_and_record_at(ip(3), now).is_ok());
}

#[test]
fn clones_share_state() {
    let rl = limiter();
    let twin = rl.clone();
    let now = Instant::now();

    for _ in 0..PER_CLIENT {
        rl.check_and_record_at(ip(9), now).unwrap();
    }
    assert!(twin.check_and_record_at(ip(9), now).is_err());
}

#[test]
fn config_from_lookup_parses_and_defaults() {
    let cfg = RateLimitConfig::from_lookup(|key| match key {
        "RATE_LIMIT_PER_CLIENT" => Some("4".into()),
        "RATE_LIMIT_GLOBAL_WINDOW_SECS" => Some("120".into()),
        "RATE_LIMIT_GLOBAL" => Some("lots".into()),
        _ => None,
    });
    assert_eq!(cfg.per_client_limit, 4);
    assert_eq!(cfg.per_client_window, Duration::from_secs(DEFAULT_PER_CLIENT_WINDOW_SECS));
    assert_eq!(cfg.global_limit, DEFAULT_GLOBAL_LIMIT);
    assert_eq!(cfg.global_window, Duration::from_secs(120));
}
