//! Load service configuration from environment variables.

use crate::config::types::{DbParts, ServiceConfig};
use crate::error::ConfigError;
use crate::routes::DEFAULT_BODY_LIMIT;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8010";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

impl ServiceConfig {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = match get("DATABASE_URL") {
            Some(url) => url,
            None => DbParts {
                username: get("APP_DB_USERNAME").unwrap_or_else(|| "postgres".into()),
                password: get("APP_DB_PASSWORD").unwrap_or_default(),
                host: get("APP_DB_HOST").unwrap_or_else(|| "localhost".into()),
                port: parse_or(get("APP_DB_PORT"), "APP_DB_PORT", 5432)?,
                name: get("APP_DB_NAME").unwrap_or_else(|| "postgres".into()),
            }
            .to_url(),
        };

        let bind_addr = parse_or(get("BIND_ADDR"), "BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 8010)))?;
        let max_connections = parse_or(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }
        let acquire_timeout = Duration::from_secs(parse_or(
            get("DB_ACQUIRE_TIMEOUT_SECS"),
            "DB_ACQUIRE_TIMEOUT_SECS",
            DEFAULT_ACQUIRE_TIMEOUT_SECS,
        )?);
        let body_limit = parse_or(get("REQUEST_BODY_LIMIT"), "REQUEST_BODY_LIMIT", DEFAULT_BODY_LIMIT)?;
        let ensure_schema = match get("ENSURE_SCHEMA") {
            None => true,
            Some(v) => parse_bool(&v).ok_or(ConfigError::Invalid {
                key: "ENSURE_SCHEMA",
                value: v,
            })?,
        };

        Ok(ServiceConfig {
            database_url,
            bind_addr,
            max_connections,
            acquire_timeout,
            body_limit,
            ensure_schema,
        })
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid { key, value: v }),
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
