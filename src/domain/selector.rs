//! Organization selector: the domain / organization id pair both tools accept.

use super::errors::ValidationError;
use super::non_empty::NonEmptyString;

/// Identifies an organization by domain, by Apollo organization id, or both.
///
/// At least one of the two is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationSelector {
    domain: Option<NonEmptyString>,
    organization_id: Option<NonEmptyString>,
}

impl OrganizationSelector {
    /// Validate raw tool input.
    ///
    /// Each supplied field is trimmed and must be non-empty. Afterwards at
    /// least one of the two has to be present.
    pub fn new(
        domain: Option<String>,
        organization_id: Option<String>,
    ) -> Result<Self, ValidationError> {
        let domain = NonEmptyString::optional("domain", domain)?;
        let organization_id = NonEmptyString::optional("organizationId", organization_id)?;

        if domain.is_none() && organization_id.is_none() {
            return Err(ValidationError::MissingSelector);
        }

        Ok(Self {
            domain,
            organization_id,
        })
    }

    pub fn domain(&self) -> Option<&NonEmptyString> {
        self.domain.as_ref()
    }

    pub fn organization_id(&self) -> Option<&NonEmptyString> {
        self.organization_id.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_one_identifier() {
        assert_eq!(
            OrganizationSelector::new(None, None),
            Err(ValidationError::MissingSelector)
        );
    }

    #[test]
    fn test_domain_only() {
        let selector = OrganizationSelector::new(Some("apollo.io".into()), None).unwrap();
        assert_eq!(selector.domain().unwrap().as_str(), "apollo.io");
        assert!(selector.organization_id().is_none());
    }

    #[test]
    fn test_both_identifiers() {
        let selector =
            OrganizationSelector::new(Some(" apollo.io".into()), Some("abc123 ".into())).unwrap();
        assert_eq!(selector.domain().unwrap().as_str(), "apollo.io");
        assert_eq!(selector.organization_id().unwrap().as_str(), "abc123");
    }

    #[test]
    fn test_blank_field_is_a_field_error_not_a_missing_selector() {
        assert_eq!(
            OrganizationSelector::new(Some("  ".into()), Some("abc123".into())),
            Err(ValidationError::EmptyField("domain"))
        );
        assert_eq!(
            OrganizationSelector::new(None, Some("".into())),
            Err(ValidationError::EmptyField("organizationId"))
        );
    }
}
