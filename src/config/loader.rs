//! Configuration loading from the process environment.

use crate::config::schema::{EchoConfig, DEFAULT_PORT};

/// Environment variable holding the listen port.
pub const PORT_ENV: &str = "PORT";

impl EchoConfig {
    /// Defaults with the listen port taken from `PORT`.
    ///
    /// Infallible: an unusable `PORT` falls back to [`DEFAULT_PORT`].
    pub fn from_env() -> Self {
        let port = std::env::var(PORT_ENV).ok();

        let mut config = EchoConfig::default();
        config.listener.port = parse_port(port.as_deref());
        config
    }
}

/// Resolve a raw `PORT` value.
///
/// Missing, non-numeric, out-of-range and zero values all fall back to
/// [`DEFAULT_PORT`].
pub fn parse_port(raw: Option<&str>) -> u16 {
    match raw.and_then(|v| v.trim().parse::<u16>().ok()) {
        Some(0) | None => DEFAULT_PORT,
        Some(port) => port,
    }
}
