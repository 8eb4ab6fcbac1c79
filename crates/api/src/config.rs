//! Runtime configuration read from the environment.

use std::net::SocketAddr;

use chrono::Duration;
use thiserror::Error;

use loadsim_auth::DEFAULT_TTL_MINUTES;

pub const BIND_ADDR_VAR: &str = "LOADSIM_BIND_ADDR";
pub const TOKEN_TTL_VAR: &str = "LOADSIM_TOKEN_TTL_MINUTES";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub token_ttl: Duration,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: bind_raw.clone(),
            })?;

        let ttl_minutes = match lookup(TOKEN_TTL_VAR) {
            None => DEFAULT_TTL_MINUTES,
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(m) if m > 0 => m,
                _ => {
                    tracing::warn!(
                        value = %raw,
                        default = DEFAULT_TTL_MINUTES,
                        "{TOKEN_TTL_VAR} must be a positive number of minutes; using default"
                    );
                    DEFAULT_TTL_MINUTES
                }
            },
        };

        Ok(Self {
            bind_addr,
            token_ttl: Duration::minutes(ttl_minutes),
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            token_ttl: Duration::minutes(DEFAULT_TTL_MINUTES),
        }
    }
}
