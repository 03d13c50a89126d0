//! Error types for the Apollo MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::fmt;
use thiserror::Error;

/// The upstream operation a request belonged to.
///
/// Its `Display` form is the prefix of upstream failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamOperation {
    /// `POST /mixed_people/search`
    PeopleSearch,
    /// `POST /organizations/enrich`
    OrganizationEnrichment,
}

impl UpstreamOperation {
    /// Path of the endpoint, relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Self::PeopleSearch => "/mixed_people/search",
            Self::OrganizationEnrichment => "/organizations/enrich",
        }
    }
}

impl fmt::Display for UpstreamOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PeopleSearch => write!(f, "Apollo API request"),
            Self::OrganizationEnrichment => write!(f, "Apollo organization enrichment"),
        }
    }
}

/// Errors that can occur while serving a tool call.
#[derive(Error, Debug)]
pub enum ApolloApiError {
    /// Tool input failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Required configuration is missing or invalid
    #[error("{0}")]
    Configuration(#[from] ConfigError),

    /// Apollo returned a non-2xx status; `body` is the raw response text
    #[error("{operation} failed with status {status}: {body}")]
    Upstream {
        operation: UpstreamOperation,
        status: u16,
        body: String,
    },

    /// Network-level failure (DNS, connection refused, I/O)
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// A successful response body was not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("{0} environment variable is required.")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ApolloApiError
pub type ApolloApiResult<T> = Result<T, ApolloApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
