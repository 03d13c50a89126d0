//! JSON body builder shared by every upstream request.

use serde::Serialize;
use serde_json::{Map, Value};

/// A JSON object sent as the request body.
pub type UpstreamPayload = Map<String, Value>;

/// Builds an [`UpstreamPayload`] key by key.
///
/// Optional values are only inserted when present; the builder never writes
/// `null`.
#[derive(Debug, Default)]
pub struct PayloadBuilder {
    fields: UpstreamPayload,
}

impl PayloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a required field.
    pub fn field(mut self, key: &str, value: impl Serialize) -> serde_json::Result<Self> {
        self.fields.insert(key.to_string(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Insert `value` under `key` only if it is `Some`.
    pub fn optional<T: Serialize>(self, key: &str, value: Option<T>) -> serde_json::Result<Self> {
        match value {
            Some(value) => self.field(key, value),
            None => Ok(self),
        }
    }

    pub fn build(self) -> UpstreamPayload {
        self.fields
    }
}
