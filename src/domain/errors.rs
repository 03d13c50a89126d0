//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating tool input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Neither `domain` nor `organizationId` was supplied.
    MissingSelector,

    /// A string field was empty after trimming.
    EmptyField(&'static str),

    /// A numeric field fell outside its allowed range.
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: Option<i64>,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSelector => write!(f, "Provide either domain or organizationId."),
            Self::EmptyField(field) => {
                write!(f, "{} must contain at least 1 character", field)
            }
            Self::OutOfRange {
                field,
                value,
                min,
                max: Some(max),
            } => write!(f, "{} must be between {} and {}, got {}", field, min, max, value),
            Self::OutOfRange {
                field,
                value,
                min,
                max: None,
            } => write!(f, "{} must be at least {}, got {}", field, min, value),
        }
    }
}

impl std::error::Error for ValidationError {}
