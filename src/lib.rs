//! Apollo MCP Server - a Model Context Protocol server for the Apollo people and
//! company data API.
//!
//! The server exposes two tools, `searchPeopleContacts` and `enrichOrganization`.
//! Each call validates its input, builds a JSON body, makes exactly one POST to
//! Apollo, and returns the response as pretty-printed JSON text.
//!
//! # Architecture
//!
//! - **domain**: Validated input values (non-empty strings, selector, pagination, API key)
//! - **models**: Request bodies and the shared payload builder
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the Apollo API
//! - **metrics**: Request counters
//! - **tools**: Tool logic behind the MCP handlers
//! - **server**: MCP protocol server and transports

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod server;
pub mod tools;

pub use client::ApolloClient;
pub use config::Config;
pub use error::{ApolloApiError, ConfigError, UpstreamOperation};
pub use metrics::{Metrics, MetricsSummary};
pub use server::ApolloMcpServer;
pub use tools::{
    ContactSearchTools, EnrichOrganizationParams, OrganizationEnrichmentTools,
    SearchPeopleContactsParams,
};
