//! Organization enrichment tool.

use super::{render_response, require_api_key};
use crate::client::AsyncApolloClient;
use crate::domain::{ApiKey, OrganizationSelector};
use crate::error::ApolloApiResult;
use crate::models::OrganizationEnrichRequest;
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;

/// Arguments of `enrichOrganization`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrichOrganizationParams {
    /// Company domain, e.g. "apollo.io"
    #[serde(default)]
    #[schemars(length(min = 1))]
    pub domain: Option<String>,

    /// Apollo organization id
    #[serde(default)]
    #[schemars(length(min = 1))]
    pub organization_id: Option<String>,
}

/// Organization enrichment tool.
pub struct OrganizationEnrichmentTools {
    client: Arc<dyn AsyncApolloClient>,
    api_key: Option<ApiKey>,
}

impl OrganizationEnrichmentTools {
    pub fn new(client: Arc<dyn AsyncApolloClient>, api_key: Option<ApiKey>) -> Self {
        Self { client, api_key }
    }

    /// Enrich an organization by domain and/or id.
    ///
    /// # Returns
    /// The Apollo response as pretty-printed JSON
    pub async fn enrich_organization(
        &self,
        params: EnrichOrganizationParams,
    ) -> ApolloApiResult<String> {
        let selector = OrganizationSelector::new(params.domain, params.organization_id)?;
        let api_key = require_api_key(self.api_key.as_ref())?;

        let payload = OrganizationEnrichRequest::new(selector).to_payload()?;
        let response = self.client.enrich_organization(api_key, &payload).await?;

        render_response(&response)
    }
}
