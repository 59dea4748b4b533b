use async_trait::async_trait;
use futures::TryStreamExt;
use lyceum_core::language::Language;
use lyceum_core::resource::{ResourceFields, ResourceKind};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use super::DocumentStore;
use crate::error::StoreError;
use crate::models::record::{LocalizedRecord, StoredRecord};

/// [`DocumentStore`] backed by a MongoDB database.
///
/// Each resource kind maps to the collection named by
/// [`ResourceKind::collection`].
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn records(&self, kind: ResourceKind) -> Collection<StoredRecord> {
        self.db.collection(kind.collection())
    }

    fn documents(&self, kind: ResourceKind) -> Collection<Document> {
        self.db.collection(kind.collection())
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn count(&self, kind: ResourceKind) -> Result<u64, StoreError> {
        Ok(self.records(kind).count_documents(doc! {}).await?)
    }

    async fn find_localized(
        &self,
        kind: ResourceKind,
        language: Language,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<LocalizedRecord>, StoreError> {
        let mut projection = Document::new();
        projection.insert(language.name_field(), 1);
        projection.insert(language.description_field(), 1);
        projection.insert("photo", 1);

        let docs: Vec<Document> = self
            .documents(kind)
            .find(doc! {})
            .projection(projection)
            .skip(skip)
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await?
            .try_collect()
            .await?;

        docs.iter()
            .map(|doc| LocalizedRecord::from_document(doc, language))
            .collect()
    }

    async fn insert(
        &self,
        kind: ResourceKind,
        fields: &ResourceFields,
    ) -> Result<StoredRecord, StoreError> {
        let mut record = StoredRecord::new(None, fields);
        let result = self.records(kind).insert_one(&record).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Decode("inserted _id is not an ObjectId".into()))?;
        record.id = Some(id);
        Ok(record)
    }

    async fn replace(
        &self,
        kind: ResourceKind,
        id: ObjectId,
        fields: &ResourceFields,
    ) -> Result<Option<StoredRecord>, StoreError> {
        let replacement = StoredRecord::new(None, fields);
        let updated = self
            .records(kind)
            .find_one_and_replace(doc! { "_id": id }, replacement)
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated)
    }

    async fn delete(&self, kind: ResourceKind, id: ObjectId) -> Result<bool, StoreError> {
        let result = self.records(kind).delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
