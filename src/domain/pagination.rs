//! Page / limit pair for the people search.

use super::errors::ValidationError;

/// Page used when the caller does not supply one.
pub const DEFAULT_PAGE: u64 = 1;

/// Limit used when the caller does not supply one.
pub const DEFAULT_LIMIT: u32 = 100;

/// Largest page size Apollo accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// Validated pagination input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u64,
    limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Apply defaults and bounds: `page >= 1`, `1 <= limit <= 100`.
    ///
    /// Any positive `i64` page is accepted; there is no upper page bound.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Result<Self, ValidationError> {
        let page = match page {
            None => DEFAULT_PAGE,
            Some(value) => Self::check_range("page", value, 1, None)?.unsigned_abs(),
        };
        let limit = match limit {
            None => DEFAULT_LIMIT,
            Some(value) => {
                let value = Self::check_range("limit", value, 1, Some(i64::from(MAX_PER_PAGE)))?;
                u32::try_from(value).unwrap_or(MAX_PER_PAGE)
            }
        };
        Ok(Self { page, limit })
    }

    fn check_range(
        field: &'static str,
        value: i64,
        min: i64,
        max: Option<i64>,
    ) -> Result<i64, ValidationError> {
        if value < min || max.is_some_and(|max| value > max) {
            return Err(ValidationError::OutOfRange {
                field,
                value,
                min,
                max,
            });
        }
        Ok(value)
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Page size sent upstream. Always `min(limit, 100)`.
    pub fn per_page(&self) -> u32 {
        self.limit.min(MAX_PER_PAGE)
    }
}
