//! Resource kinds and the content fields they share.
//!
//! Teachers and courses have the same shape. The kind only decides which
//! collection a record lives in and how it is labelled in responses.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::language::Language;

/// The two resource collections served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Teacher,
    Course,
}

impl ResourceKind {
    /// Collection name in the document store.
    pub fn collection(self) -> &'static str {
        match self {
            ResourceKind::Teacher => "teachers",
            ResourceKind::Course => "courses",
        }
    }

    /// Singular label used in not-found and delete confirmation messages.
    pub fn entity(self) -> &'static str {
        match self {
            ResourceKind::Teacher => "Teacher",
            ResourceKind::Course => "Course",
        }
    }

    /// Key holding the record list in a localized page response.
    pub fn list_key(self) -> &'static str {
        self.collection()
    }
}

/// Type-level handle on a [`ResourceKind`], used to monomorphize the
/// repository and HTTP handlers once per collection.
pub trait Resource: Send + Sync + 'static {
    const KIND: ResourceKind;
}

/// Marker for the `teachers` collection.
#[derive(Debug, Clone, Copy)]
pub struct Teacher;

impl Resource for Teacher {
    const KIND: ResourceKind = ResourceKind::Teacher;
}

/// Marker for the `courses` collection.
#[derive(Debug, Clone, Copy)]
pub struct Course;

impl Resource for Course {
    const KIND: ResourceKind = ResourceKind::Course;
}

/// The writable content of a teacher or course.
///
/// Every field is optional. Absent fields are neither stored nor serialized.
/// Scalar values (numbers, booleans) are accepted and stored as their string
/// form; objects and arrays are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceFields {
    #[serde(
        default,
        deserialize_with = "coerce_to_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name_ru: Option<String>,
    #[serde(
        default,
        deserialize_with = "coerce_to_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name_en: Option<String>,
    #[serde(
        default,
        deserialize_with = "coerce_to_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name_ua: Option<String>,
    #[serde(
        default,
        deserialize_with = "coerce_to_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description_ru: Option<String>,
    #[serde(
        default,
        deserialize_with = "coerce_to_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description_en: Option<String>,
    #[serde(
        default,
        deserialize_with = "coerce_to_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description_ua: Option<String>,
    #[serde(
        default,
        deserialize_with = "coerce_to_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub photo: Option<String>,
}

impl ResourceFields {
    pub fn name(&self, language: Language) -> Option<&str> {
        match language {
            Language::Ru => self.name_ru.as_deref(),
            Language::En => self.name_en.as_deref(),
            Language::Ua => self.name_ua.as_deref(),
        }
    }

    pub fn description(&self, language: Language) -> Option<&str> {
        match language {
            Language::Ru => self.description_ru.as_deref(),
            Language::En => self.description_en.as_deref(),
            Language::Ua => self.description_ua.as_deref(),
        }
    }
}

/// Deserialize a scalar into its string form. `null` stays `None`.
fn coerce_to_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScalarVisitor;

    impl<'de> Visitor<'de> for ScalarVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string, number, boolean or null")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_owned()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(ScalarVisitor)
}
