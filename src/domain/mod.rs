//! Domain value objects and types.
//!
//! Validated wrappers for tool input. Each value object checks its
//! constraints at construction time, so a built value is always safe to put
//! into an upstream payload.

pub mod api_key;
pub mod errors;
pub mod non_empty;
pub mod pagination;
pub mod selector;

pub use api_key::ApiKey;
pub use errors::ValidationError;
pub use non_empty::NonEmptyString;
pub use pagination::Pagination;
pub use selector::OrganizationSelector;
