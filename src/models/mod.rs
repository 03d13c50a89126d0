//! Request models for the Apollo API.
//!
//! Each request type turns validated tool input into the JSON body Apollo
//! expects, going through the shared [`PayloadBuilder`] so that absent inputs
//! never show up as keys.

pub mod organization;
pub mod payload;
pub mod people_search;

pub use organization::OrganizationEnrichRequest;
pub use payload::{PayloadBuilder, UpstreamPayload};
pub use people_search::PeopleSearchRequest;
