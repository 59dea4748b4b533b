//! Repository for the `teachers` and `courses` collections.
//!
//! A single generic implementation serves both kinds; `R` picks the
//! collection at compile time.

use std::marker::PhantomData;

use lyceum_core::language::Language;
use lyceum_core::pagination::PageRequest;
use lyceum_core::resource::{Resource, ResourceFields};
use mongodb::bson::oid::ObjectId;

use crate::error::StoreError;
use crate::models::record::{LocalizedPage, Record};
use crate::store::DocumentStore;

/// Provides data access for one resource kind.
pub struct ResourceRepo<R>(PhantomData<R>);

impl<R: Resource> ResourceRepo<R> {
    /// Fetch one page of records projected onto `language`, together with the
    /// total page count for the collection.
    ///
    /// The count and the page are read separately, so a concurrent write can
    /// make them disagree by one record.
    pub async fn list_localized(
        store: &dyn DocumentStore,
        language: Language,
        page: PageRequest,
    ) -> Result<LocalizedPage, StoreError> {
        let total = store.count(R::KIND).await?;
        let records = store
            .find_localized(R::KIND, language, page.skip(), page.per_page())
            .await?;

        Ok(LocalizedPage {
            total_pages: page.total_pages(total),
            records,
        })
    }

    /// Insert a new record built from `fields`.
    pub async fn create(
        store: &dyn DocumentStore,
        fields: &ResourceFields,
    ) -> Result<Record, StoreError> {
        let stored = store.insert(R::KIND, fields).await?;
        Record::try_from(stored)
    }

    /// Replace the content of the record at `id`.
    ///
    /// Returns `None` if no record has that id, including when `id` is not a
    /// well-formed ObjectId.
    pub async fn update(
        store: &dyn DocumentStore,
        id: &str,
        fields: &ResourceFields,
    ) -> Result<Option<Record>, StoreError> {
        let Some(oid) = parse_id(id) else {
            return Ok(None);
        };

        store
            .replace(R::KIND, oid, fields)
            .await?
            .map(Record::try_from)
            .transpose()
    }

    /// Delete the record at `id`.
    ///
    /// Returns `true` if a record was deleted.
    pub async fn delete(store: &dyn DocumentStore, id: &str) -> Result<bool, StoreError> {
        match parse_id(id) {
            Some(oid) => store.delete(R::KIND, oid).await,
            None => Ok(false),
        }
    }
}

fn parse_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}
