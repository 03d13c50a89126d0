//! Configuration management for the Apollo MCP Server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the
//! .env file through `dotenvy`, which never prints.

use crate::domain::ApiKey;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

/// Default Apollo API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.apollo.io/api/v1";

/// Default bind address for the HTTP transport.
pub const DEFAULT_HTTP_BIND: &str = "127.0.0.1:3000";

/// Name of the variable holding the Apollo API key.
pub const API_KEY_VAR: &str = "APOLLO_API_KEY";

/// How the MCP server talks to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// MCP over stdin/stdout
    Stdio,
    /// MCP Streamable HTTP (GET/POST/DELETE on `/mcp`)
    Http,
}

/// Configuration for the Apollo MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Apollo API base URL
    pub api_base_url: String,

    /// Apollo API key. The server starts without one; tool calls then fail
    /// with a configuration error.
    pub api_key: Option<ApiKey>,

    /// HTTP request timeout in seconds (default: none)
    pub request_timeout: Option<u64>,

    /// Transport to serve on (default: stdio)
    pub transport: TransportKind,

    /// Bind address for the HTTP transport
    pub http_bind: SocketAddr,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `APOLLO_API_KEY`: API key sent as `X-Api-Key`
    /// - `APOLLO_API_BASE_URL`: Base URL for the Apollo API
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: no timeout)
    /// - `MCP_TRANSPORT`: `stdio` or `http` (default: `stdio`)
    /// - `MCP_HTTP_BIND`: socket address for `http` (default: `127.0.0.1:3000`)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let api_key = env::var(API_KEY_VAR).ok().and_then(|key| ApiKey::new(key));

        let api_base_url =
            env::var("APOLLO_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        // Validate API URL format
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "APOLLO_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_timeout("REQUEST_TIMEOUT")?;
        let transport = Self::parse_env_transport("MCP_TRANSPORT")?;

        let http_bind = env::var("MCP_HTTP_BIND").unwrap_or_else(|_| DEFAULT_HTTP_BIND.to_string());
        let http_bind = http_bind
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                var: "MCP_HTTP_BIND".to_string(),
                reason: format!(
                    "Must be a socket address like 127.0.0.1:3000, got: {}",
                    http_bind
                ),
            })?;

        Ok(Config {
            api_base_url,
            api_key,
            request_timeout,
            transport,
            http_bind,
        })
    }

    /// Parse an optional timeout in seconds. Zero is rejected.
    fn parse_env_timeout(var_name: &str) -> ConfigResult<Option<u64>> {
        match env::var(var_name) {
            Ok(val) => match val.parse::<u64>() {
                Ok(secs) if secs > 0 => Ok(Some(secs)),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a positive number of seconds, got: {}", val),
                }),
            },
            Err(_) => Ok(None),
        }
    }

    fn parse_env_transport(var_name: &str) -> ConfigResult<TransportKind> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "stdio" => Ok(TransportKind::Stdio),
                "http" => Ok(TransportKind::Http),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be 'stdio' or 'http', got: {}", val),
                }),
            },
            Err(_) => Ok(TransportKind::Stdio),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            request_timeout: None,
            transport: TransportKind::Stdio,
            http_bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}
