//! MCP server implementation for Apollo.
//!
//! This module provides the MCP protocol server and the two transports it can be
//! served on: stdio, and Streamable HTTP (GET/POST/DELETE on `/mcp`).

pub mod handlers;

pub use handlers::ApolloMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::{StreamableHttpServerConfig, StreamableHttpService};
use rmcp::ServiceExt;
use std::net::SocketAddr;
use std::sync::Arc;

/// Path the Streamable HTTP service is mounted on.
pub const MCP_HTTP_PATH: &str = "/mcp";

/// Run the Apollo MCP server with stdio transport.
///
/// This function starts the MCP server and runs it until completion.
/// It communicates via stdin/stdout using the MCP protocol.
pub async fn run_server(server: ApolloMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}

/// Build an axum router serving MCP Streamable HTTP at [`MCP_HTTP_PATH`].
///
/// Each session gets its own clone of `server`.
pub fn http_router(server: ApolloMcpServer) -> axum::Router {
    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        Arc::new(LocalSessionManager::default()),
        StreamableHttpServerConfig::default(),
    );

    axum::Router::new().nest_service(MCP_HTTP_PATH, service)
}

/// Run the Apollo MCP server over Streamable HTTP until Ctrl-C.
pub async fn run_http_server(server: ApolloMcpServer, bind: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!(
        "Serving MCP over HTTP at http://{}{}",
        listener.local_addr()?,
        MCP_HTTP_PATH
    );

    axum::serve(listener, http_router(server))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
