use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup_from(&[]));
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.listen_addr(), "0.0.0.0:3000");
}

#[test]
fn reads_all_keys() {
    let config = ServerConfig::from_lookup(lookup_from(&[
        ("BIND_ADDR", "127.0.0.1"),
        ("PORT", " 8080 "),
        ("RELAY_MAX_BODY_BYTES", "1024"),
    ]));
    assert_eq!(config.listen_addr(), "127.0.0.1:8080");
    assert_eq!(config.max_body_bytes, 1024);
}

#[test]
fn garbage_numbers_fall_back_to_defaults() {
    let config = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "abc"),
        ("RELAY_MAX_BODY_BYTES", "-5"),
    ]));
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
}

#[test]
fn out_of_range_port_falls_back() {
    let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")]));
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn blank_bind_addr_uses_default() {
    let config = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "  ")]));
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
}
