//! Page arithmetic for the localized list endpoints.
//!
//! Pages are 1-based. Callers hand in the raw (optional) query values and get
//! back a [`PageRequest`] whose skip/limit are always well defined.

use crate::error::CoreError;

/// Page returned when the client does not ask for one.
pub const DEFAULT_PAGE: i64 = 1;

/// Records per page when `perpage` is omitted.
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Largest accepted `perpage`.
pub const MAX_PER_PAGE: i64 = 100;

/// A validated page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    per_page: u64,
}

impl PageRequest {
    /// Validate raw `page` / `perpage` values, applying defaults for `None`.
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Result<Self, CoreError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE);

        if page < 1 {
            return Err(CoreError::Validation(
                "page must be a positive integer".into(),
            ));
        }
        if !(1..=MAX_PER_PAGE).contains(&per_page) {
            return Err(CoreError::Validation(format!(
                "perpage must be between 1 and {MAX_PER_PAGE}"
            )));
        }

        Ok(Self {
            page: page as u64,
            per_page: per_page as u64,
        })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Number of records preceding this page, capped at `i64::MAX` so it
    /// always fits the store's signed skip.
    pub fn skip(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.per_page)
            .min(i64::MAX as u64)
    }

    /// `ceil(total / per_page)`; an empty collection has zero pages.
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE as u64,
            per_page: DEFAULT_PER_PAGE as u64,
        }
    }
}
