//! The document store seam.
//!
//! One trait object serves both collections; each call names the
//! [`ResourceKind`] it targets.

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;
use lyceum_core::language::Language;
use lyceum_core::resource::{ResourceFields, ResourceKind};
use mongodb::bson::oid::ObjectId;

use crate::error::StoreError;
use crate::models::record::{LocalizedRecord, StoredRecord};

/// Primitive document operations the repositories are built from.
///
/// Implementations keep the store's natural iteration order; no sort is
/// applied to `find_localized`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Number of documents in the collection.
    async fn count(&self, kind: ResourceKind) -> Result<u64, StoreError>;

    /// Fetch up to `limit` documents after skipping `skip`, projected onto
    /// `language`.
    async fn find_localized(
        &self,
        kind: ResourceKind,
        language: Language,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<LocalizedRecord>, StoreError>;

    /// Insert a new document and return it with its assigned id.
    async fn insert(
        &self,
        kind: ResourceKind,
        fields: &ResourceFields,
    ) -> Result<StoredRecord, StoreError>;

    /// Replace the content of the document at `id`.
    ///
    /// Returns the document after replacement, or `None` if nothing has that id.
    async fn replace(
        &self,
        kind: ResourceKind,
        id: ObjectId,
        fields: &ResourceFields,
    ) -> Result<Option<StoredRecord>, StoreError>;

    /// Remove the document at `id`. Returns `true` if one was removed.
    async fn delete(&self, kind: ResourceKind, id: ObjectId) -> Result<bool, StoreError>;

    /// Verify the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
