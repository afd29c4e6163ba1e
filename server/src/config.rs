//! Listener and request-size settings parsed from environment variables.
//!
//! Malformed or missing values fall back to defaults; nothing here can stop
//! the relay from starting.

use crate::state::DEFAULT_MAX_BODY_BYTES;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR.to_owned(), port: DEFAULT_PORT, max_body_bytes: DEFAULT_MAX_BODY_BYTES }
    }
}

impl ServerConfig {
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `RELAY_MAX_BODY_BYTES`: default 32 MiB
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = lookup("BIND_ADDR")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());

        Self {
            bind_addr,
            port: lookup_parse(&lookup, "PORT", DEFAULT_PORT),
            max_body_bytes: lookup_parse(&lookup, "RELAY_MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES),
        }
    }

    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn lookup_parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match lookup(key).map(|v| v.trim().parse::<T>()) {
        Some(Ok(value)) => value,
        Some(Err(_)) => {
            tracing::warn!(key, "malformed value, using default");
            default
        }
        None => default,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
