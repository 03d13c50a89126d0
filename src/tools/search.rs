//! People search tool.
//!
//! Finds contacts at an organization identified by domain and/or Apollo
//! organization id, one page at a time.

use super::{deserialize_whole_number, render_response, require_api_key};
use crate::client::AsyncApolloClient;
use crate::domain::{ApiKey, OrganizationSelector, Pagination};
use crate::error::ApolloApiResult;
use crate::models::PeopleSearchRequest;
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;

/// Arguments of `searchPeopleContacts`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchPeopleContactsParams {
    /// Company domain, e.g. "apollo.io"
    #[serde(default)]
    #[schemars(length(min = 1))]
    pub domain: Option<String>,

    /// Apollo organization id
    #[serde(default)]
    #[schemars(length(min = 1))]
    pub organization_id: Option<String>,

    /// Page number, starting at 1 (default: 1)
    #[serde(default, deserialize_with = "deserialize_whole_number")]
    #[schemars(with = "Option<i64>", range(min = 1))]
    pub page: Option<i64>,

    /// Results per page, 1-100 (default: 100)
    #[serde(default, deserialize_with = "deserialize_whole_number")]
    #[schemars(with = "Option<i64>", range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

/// People search tool.
pub struct ContactSearchTools {
    client: Arc<dyn AsyncApolloClient>,
    api_key: Option<ApiKey>,
}

impl ContactSearchTools {
    /// Create the search tool.
    ///
    /// # Arguments
    /// * `client` - Apollo API client
    /// * `api_key` - Key for the `X-Api-Key` header; `None` makes every call fail
    pub fn new(client: Arc<dyn AsyncApolloClient>, api_key: Option<ApiKey>) -> Self {
        Self { client, api_key }
    }

    /// Search people at an organization.
    ///
    /// Validation and the API key check happen before any request is made.
    ///
    /// # Returns
    /// The Apollo response as pretty-printed JSON
    pub async fn search_people_contacts(
        &self,
        params: SearchPeopleContactsParams,
    ) -> ApolloApiResult<String> {
        let pagination = Pagination::new(params.page, params.limit)?;
        let selector = OrganizationSelector::new(params.domain, params.organization_id)?;
        let api_key = require_api_key(self.api_key.as_ref())?;

        let payload = PeopleSearchRequest::new(selector, pagination).to_payload()?;
        let response = self.client.search_people(api_key, &payload).await?;

        render_response(&response)
    }
}
