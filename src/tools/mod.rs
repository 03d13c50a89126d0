//! MCP tools backed by the Apollo API.
//!
//! This module provides two tools:
//! - **Search**: find people at an organization (`searchPeopleContacts`)
//! - **Enrichment**: fetch company details (`enrichOrganization`)
//!
//! Both run the same pipeline: validate input, check the API key, build the
//! payload, make one request, and render the response.

pub mod enrichment;
pub mod search;

pub use enrichment::{EnrichOrganizationParams, OrganizationEnrichmentTools};
pub use search::{ContactSearchTools, SearchPeopleContactsParams};

use crate::config::API_KEY_VAR;
use crate::domain::ApiKey;
use crate::error::{ApolloApiResult, ConfigError};
use serde::{de, Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Render an upstream response as pretty-printed JSON (2-space indent).
pub fn render_response(response: &Value) -> ApolloApiResult<String> {
    Ok(serde_json::to_string_pretty(response)?)
}

/// Deserialize an optional whole number.
///
/// JSON has one number type, so `2.0` is accepted as `2`. Fractions and values
/// outside the `i64` range are rejected.
fn deserialize_whole_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(value) = number.as_i64() {
        return Ok(Some(value));
    }
    // 2^63; i64::MAX as f64 rounds up to it, so the upper bound is exclusive
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    match number.as_f64() {
        Some(value) if value.fract() == 0.0 && (-LIMIT..LIMIT).contains(&value) => {
            Ok(Some(value as i64))
        }
        _ => Err(de::Error::custom(format!(
            "expected a whole number, got {}",
            number
        ))),
    }
}

/// Resolve the API key a tool was constructed with.
fn require_api_key(api_key: Option<&ApiKey>) -> ApolloApiResult<&ApiKey> {
    api_key.ok_or_else(|| ConfigError::MissingVar(API_KEY_VAR.to_string()).into())
}
