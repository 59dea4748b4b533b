//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters for the localized list endpoints (`?page=&perpage=`).
///
/// Values are validated into a
/// [`PageRequest`](lyceum_core::pagination::PageRequest) by the handler;
/// non-numeric values are rejected during extraction.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub perpage: Option<i64>,
}
