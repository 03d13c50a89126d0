//! Body of `POST /organizations/enrich`.

use super::payload::{PayloadBuilder, UpstreamPayload};
use crate::domain::OrganizationSelector;

/// A validated organization enrichment.
#[derive(Debug, Clone)]
pub struct OrganizationEnrichRequest {
    pub selector: OrganizationSelector,
}

impl OrganizationEnrichRequest {
    pub fn new(selector: OrganizationSelector) -> Self {
        Self { selector }
    }

    /// Build the Apollo body: `{domain?, organization_id?}`.
    ///
    /// Unlike the people search, `organization_id` is a single string.
    pub fn to_payload(&self) -> serde_json::Result<UpstreamPayload> {
        Ok(PayloadBuilder::new()
            .optional("domain", self.selector.domain())?
            .optional("organization_id", self.selector.organization_id())?
            .build())
    }
}
