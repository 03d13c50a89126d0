//! MCP tool handlers for the Apollo server.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.

use crate::client::AsyncApolloClient;
use crate::domain::{ApiKey, ValidationError};
use crate::error::{ApolloApiError, ApolloApiResult};
use crate::tools::{
    ContactSearchTools, EnrichOrganizationParams, OrganizationEnrichmentTools,
    SearchPeopleContactsParams,
};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use std::sync::Arc;

/// The MCP server exposing Apollo contact search and organization enrichment.
#[derive(Clone)]
pub struct ApolloMcpServer {
    search_tools: Arc<ContactSearchTools>,
    enrichment_tools: Arc<OrganizationEnrichmentTools>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for ApolloMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "apollo-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for Apollo - searches people at an organization and enriches organization details, by company domain or Apollo organization id.".into()),
        }
    }
}

/// Convert a tool outcome into an MCP result.
///
/// A malformed field (empty string, out-of-range number) is a protocol-level
/// invalid params error. Every other failure, including the missing selector,
/// a missing API key and upstream or transport errors, is returned as a tool
/// result with `is_error` set so the model can read the message.
fn into_tool_result(
    tool: &str,
    outcome: ApolloApiResult<String>,
) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(e) => {
            tracing::error!("{} failed: {}", tool, e);
            match e {
                ApolloApiError::Validation(
                    ValidationError::EmptyField(_) | ValidationError::OutOfRange { .. },
                ) => Err(McpError::invalid_params(e.to_string(), None)),
                _ => Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
            }
        }
    }
}

#[tool_router]
impl ApolloMcpServer {
    /// Create a new Apollo MCP server.
    ///
    /// The API key is handed to both tools; without one the server still
    /// starts, and each tool call fails with a configuration error.
    pub fn new(client: Arc<dyn AsyncApolloClient>, api_key: Option<ApiKey>) -> Self {
        let search_tools = Arc::new(ContactSearchTools::new(client.clone(), api_key.clone()));
        let enrichment_tools = Arc::new(OrganizationEnrichmentTools::new(client, api_key));

        Self {
            search_tools,
            enrichment_tools,
            tool_router: Self::tool_router(),
        }
    }

    /// Search Apollo people by company domain or organization id.
    #[tool(
        name = "searchPeopleContacts",
        description = "Searches Apollo contacts by company domain or organization id."
    )]
    async fn search_people_contacts(
        &self,
        params: Parameters<SearchPeopleContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: searchPeopleContacts called");
        tracing::debug!(
            "Parameters: domain={:?}, organization_id={:?}, page={:?}, limit={:?}",
            params.domain,
            params.organization_id,
            params.page,
            params.limit
        );

        let outcome = self.search_tools.search_people_contacts(params).await;
        into_tool_result("searchPeopleContacts", outcome)
    }

    /// Enrich company details by domain or organization id.
    #[tool(
        name = "enrichOrganization",
        description = "Enriches company details by domain or organization id."
    )]
    async fn enrich_organization(
        &self,
        params: Parameters<EnrichOrganizationParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: enrichOrganization called");
        tracing::debug!(
            "Parameters: domain={:?}, organization_id={:?}",
            params.domain,
            params.organization_id
        );

        let outcome = self.enrichment_tools.enrich_organization(params).await;
        into_tool_result("enrichOrganization", outcome)
    }
}
