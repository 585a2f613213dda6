//! Configuration management for the address book service.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read if present; `dotenvy` does not write to stdout, which the
//! MCP stdio transport reserves for protocol traffic.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

/// How the service is exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// JSON over HTTP
    Http,
    /// MCP over stdin/stdout
    Stdio,
}

impl FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Transport::Http),
            "stdio" | "mcp" => Ok(Transport::Stdio),
            other => Err(format!("Must be 'http' or 'stdio', got: {}", other)),
        }
    }
}

/// Configuration for the address book service.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP bind address (default: 0.0.0.0:5000)
    pub bind_addr: SocketAddr,

    /// Transport to serve on (default: http)
    pub transport: Transport,

    /// Log level used when RUST_LOG is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_BIND`: HTTP bind address (default: 0.0.0.0:5000)
    /// - `ADDRESS_BOOK_TRANSPORT`: `http` or `stdio` (default: http)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let bind_addr = match env::var("ADDRESS_BOOK_BIND") {
            Ok(val) => val.parse::<SocketAddr>().map_err(|_| ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_BIND".to_string(),
                reason: format!("Must be a socket address like 0.0.0.0:5000, got: {}", val),
            })?,
            Err(_) => defaults.bind_addr,
        };

        let transport = match env::var("ADDRESS_BOOK_TRANSPORT") {
            Ok(val) => val
                .parse::<Transport>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_TRANSPORT".to_string(),
                    reason,
                })?,
            Err(_) => defaults.transport,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            bind_addr,
            transport,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            transport: Transport::Http,
            log_level: "info".to_string(),
        }
    }
}
