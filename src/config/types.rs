//! Service configuration values.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// Maximum request body size in bytes.
    pub body_limit: usize,
    /// Create the database and products table at startup if missing.
    pub ensure_schema: bool,
}

/// Connection parts used when `DATABASE_URL` is not set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DbParts {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

impl DbParts {
    /// Username and password are percent-encoded.
    pub fn to_url(&self) -> String {
        let username = utf8_percent_encode(&self.username, NON_ALPHANUMERIC);
        if self.password.is_empty() {
            format!("postgres://{}@{}:{}/{}", username, self.host, self.port, self.name)
        } else {
            let password = utf8_percent_encode(&self.password, NON_ALPHANUMERIC);
            format!(
                "postgres://{}:{}@{}:{}/{}",
                username, password, self.host, self.port, self.name
            )
        }
    }
}
