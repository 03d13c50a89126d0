//! Apollo MCP Server - Main entry point
//!
//! Serves the `searchPeopleContacts` and `enrichOrganization` tools over the
//! Model Context Protocol, on stdio or Streamable HTTP.

use anyhow::Result;
use apollo_mcp_server::client::{AsyncApolloClient, AsyncApolloClientImpl};
use apollo_mcp_server::config::{TransportKind, API_KEY_VAR};
use apollo_mcp_server::{ApolloClient, ApolloMcpServer, Config};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env before the subscriber so RUST_LOG / LOG_LEVEL set there apply.
    // Config::from_env loads it again for callers that skip main; dotenvy never
    // overrides variables that are already set.
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    // RUST_LOG wins, then LOG_LEVEL, then "error"
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        std::env::var("LOG_LEVEL")
            .ok()
            .and_then(|level| EnvFilter::try_new(level).ok())
            .unwrap_or_else(|| EnvFilter::new("error"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if config.api_key.is_none() {
        warn!(
            "{} is not set; tool calls will fail until it is configured",
            API_KEY_VAR
        );
    }

    info!(
        "Starting Apollo MCP Server with API URL: {}",
        config.api_base_url
    );

    let sync_client = ApolloClient::new(&config);
    let client = Arc::new(AsyncApolloClientImpl::new(sync_client)) as Arc<dyn AsyncApolloClient>;

    let server = ApolloMcpServer::new(client, config.api_key.clone());

    match config.transport {
        TransportKind::Stdio => {
            info!("Starting MCP server with stdio transport");
            apollo_mcp_server::server::run_server(server).await?;
        }
        TransportKind::Http => {
            info!("Starting MCP server with HTTP transport");
            apollo_mcp_server::server::run_http_server(server, config.http_bind).await?;
        }
    }

    info!("Apollo MCP Server shutdown complete");
    Ok(())
}
