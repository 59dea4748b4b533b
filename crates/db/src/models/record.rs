//! Record models shared by teachers and courses.

use lyceum_core::language::Language;
use lyceum_core::resource::ResourceFields;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::StoreError;

// ---------------------------------------------------------------------------
// Stored document
// ---------------------------------------------------------------------------

/// Document layout inside the `teachers` and `courses` collections.
///
/// `_id` is left unset on insert so the store assigns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_ru: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_ua: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_ru: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_ua: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl StoredRecord {
    pub fn new(id: Option<ObjectId>, fields: &ResourceFields) -> Self {
        let fields = fields.clone();
        Self {
            id,
            name_ru: fields.name_ru,
            name_en: fields.name_en,
            name_ua: fields.name_ua,
            description_ru: fields.description_ru,
            description_en: fields.description_en,
            description_ua: fields.description_ua,
            photo: fields.photo,
        }
    }

    pub fn fields(&self) -> ResourceFields {
        ResourceFields {
            name_ru: self.name_ru.clone(),
            name_en: self.name_en.clone(),
            name_ua: self.name_ua.clone(),
            description_ru: self.description_ru.clone(),
            description_en: self.description_en.clone(),
            description_ua: self.description_ua.clone(),
            photo: self.photo.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Full record (create / update responses)
// ---------------------------------------------------------------------------

/// A complete record as returned to clients, id rendered as a hex string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: ResourceFields,
}

impl TryFrom<StoredRecord> for Record {
    type Error = StoreError;

    fn try_from(stored: StoredRecord) -> Result<Self, Self::Error> {
        let id = stored
            .id
            .ok_or_else(|| StoreError::Decode("document has no _id".into()))?;
        Ok(Self {
            id: id.to_hex(),
            fields: stored.fields(),
        })
    }
}

// ---------------------------------------------------------------------------
// Localized projection (list responses)
// ---------------------------------------------------------------------------

/// A record projected onto a single language.
///
/// Serializes with language-suffixed keys, e.g.
/// `{"_id": "...", "name_en": "...", "description_en": "...", "photo": "..."}`.
/// Absent values are omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizedRecord {
    pub id: String,
    pub language: Language,
    pub name: Option<String>,
    pub description: Option<String>,
    pub photo: Option<String>,
}

impl LocalizedRecord {
    /// Project an in-memory record onto `language`.
    pub fn project(stored: &StoredRecord, language: Language) -> Result<Self, StoreError> {
        let id = stored
            .id
            .ok_or_else(|| StoreError::Decode("document has no _id".into()))?;
        let fields = stored.fields();
        Ok(Self {
            id: id.to_hex(),
            language,
            name: fields.name(language).map(str::to_owned),
            description: fields.description(language).map(str::to_owned),
            photo: fields.photo,
        })
    }

    /// Build from a document already projected by the server.
    pub fn from_document(doc: &Document, language: Language) -> Result<Self, StoreError> {
        let id = doc
            .get_object_id("_id")
            .map_err(|e| StoreError::Decode(format!("_id: {e}")))?;
        let text = |key: &str| doc.get_str(key).ok().map(str::to_owned);
        Ok(Self {
            id: id.to_hex(),
            language,
            name: text(language.name_field()),
            description: text(language.description_field()),
            photo: text("photo"),
        })
    }
}

impl Serialize for LocalizedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("_id", &self.id)?;
        if let Some(name) = &self.name {
            map.serialize_entry(self.language.name_field(), name)?;
        }
        if let Some(description) = &self.description {
            map.serialize_entry(self.language.description_field(), description)?;
        }
        if let Some(photo) = &self.photo {
            map.serialize_entry("photo", photo)?;
        }
        map.end()
    }
}

/// One page of localized records plus the page count for the whole collection.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizedPage {
    pub total_pages: u64,
    pub records: Vec<LocalizedRecord>,
}
