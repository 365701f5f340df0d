//! Process configuration read from the environment.

use std::net::SocketAddr;

use talentpitch_observability::LogFormat;

pub const BIND_ADDR_VAR: &str = "TALENTPITCH_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "TALENTPITCH_LOG_FORMAT";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_format: LogFormat::Json,
        }
    }
}

/// Log format from the process environment, without warning on bad values.
///
/// Used before logging is initialized; [`ApiConfig::from_env`] reports any
/// fallback once it is.
pub fn log_format_from_env() -> LogFormat {
    log_format_from_lookup(|key| std::env::var(key).ok())
}

fn log_format_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> LogFormat {
    lookup(LOG_FORMAT_VAR)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default()
}

impl ApiConfig {
    /// Read configuration from process environment variables.
    ///
    /// Missing variables take their defaults; unparseable ones also fall back,
    /// with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(
                    value = %raw,
                    error = %e,
                    "{BIND_ADDR_VAR} is not a socket address; using {DEFAULT_BIND_ADDR}"
                );
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "{LOG_FORMAT_VAR} ignored; using json");
                defaults.log_format
            }),
            None => defaults.log_format,
        };

        Self {
            bind_addr,
            log_format,
        }
    }
}
