//! Body of `POST /mixed_people/search`.

use super::payload::{PayloadBuilder, UpstreamPayload};
use crate::domain::{OrganizationSelector, Pagination};

/// A validated people search.
#[derive(Debug, Clone)]
pub struct PeopleSearchRequest {
    pub selector: OrganizationSelector,
    pub pagination: Pagination,
}

impl PeopleSearchRequest {
    pub fn new(selector: OrganizationSelector, pagination: Pagination) -> Self {
        Self {
            selector,
            pagination,
        }
    }

    /// Build the Apollo body:
    /// `{page, per_page, q_organization_domains?, organization_ids?}`.
    ///
    /// `organization_ids` is always a one-element list, never a bare string.
    pub fn to_payload(&self) -> serde_json::Result<UpstreamPayload> {
        let organization_ids = self.selector.organization_id().map(|id| [id]);

        Ok(PayloadBuilder::new()
            .field("page", self.pagination.page())?
            .field("per_page", self.pagination.per_page())?
            .optional("q_organization_domains", self.selector.domain())?
            .optional("organization_ids", organization_ids)?
            .build())
    }
}
