use std::collections::HashMap;

use async_trait::async_trait;
use lyceum_core::language::Language;
use lyceum_core::resource::{ResourceFields, ResourceKind};
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::DocumentStore;
use crate::error::StoreError;
use crate::models::record::{LocalizedRecord, StoredRecord};

/// Process-local [`DocumentStore`] keeping documents in insertion order.
///
/// Ids are generated the same way the MongoDB driver does, so callers cannot
/// tell the two apart. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<ResourceKind, Vec<StoredRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn count(&self, kind: ResourceKind) -> Result<u64, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(&kind).map_or(0, |docs| docs.len() as u64))
    }

    async fn find_localized(
        &self,
        kind: ResourceKind,
        language: Language,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<LocalizedRecord>, StoreError> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(&kind) else {
            return Ok(Vec::new());
        };

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        docs.iter()
            .skip(skip)
            .take(limit)
            .map(|doc| LocalizedRecord::project(doc, language))
            .collect()
    }

    async fn insert(
        &self,
        kind: ResourceKind,
        fields: &ResourceFields,
    ) -> Result<StoredRecord, StoreError> {
        let record = StoredRecord::new(Some(ObjectId::new()), fields);
        let mut collections = self.collections.write().await;
        collections.entry(kind).or_default().push(record.clone());
        Ok(record)
    }

    async fn replace(
        &self,
        kind: ResourceKind,
        id: ObjectId,
        fields: &ResourceFields,
    ) -> Result<Option<StoredRecord>, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(slot) = collections
            .get_mut(&kind)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == Some(id)))
        else {
            return Ok(None);
        };

        *slot = StoredRecord::new(Some(id), fields);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, kind: ResourceKind, id: ObjectId) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(&kind) else {
            return Ok(false);
        };

        let before = docs.len();
        docs.retain(|doc| doc.id != Some(id));
        Ok(docs.len() < before)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
