//! NonEmptyString value object.

use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;

/// A trimmed string that is guaranteed to hold at least one character.
///
/// # Example
///
/// ```
/// use apollo_mcp_server::domain::NonEmptyString;
///
/// let domain = NonEmptyString::new("domain", "  apollo.io ").unwrap();
/// assert_eq!(domain.as_str(), "apollo.io");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trim `value` and reject it if nothing is left.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` naming `field` when the trimmed
    /// value is empty.
    pub fn new(field: &'static str, value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyField(field));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Validate an optional field. Absent stays absent.
    pub fn optional(
        field: &'static str,
        value: Option<String>,
    ) -> Result<Option<Self>, ValidationError> {
        value.map(|v| Self::new(field, v)).transpose()
    }

    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for NonEmptyString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
