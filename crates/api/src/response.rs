//! Response body types for the localized list endpoints.

use lyceum_core::resource::ResourceKind;
use lyceum_db::models::record::{LocalizedPage, LocalizedRecord};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// `{ "totalPages": n, "<collection>": [...] }`
///
/// The list key follows the resource kind, so teachers are returned under
/// `teachers` and courses under `courses`.
#[derive(Debug)]
pub struct LocalizedListResponse {
    pub list_key: &'static str,
    pub total_pages: u64,
    pub records: Vec<LocalizedRecord>,
}

impl LocalizedListResponse {
    pub fn new(kind: ResourceKind, page: LocalizedPage) -> Self {
        Self {
            list_key: kind.list_key(),
            total_pages: page.total_pages,
            records: page.records,
        }
    }
}

impl Serialize for LocalizedListResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("totalPages", &self.total_pages)?;
        map.serialize_entry(self.list_key, &self.records)?;
        map.end()
    }
}
