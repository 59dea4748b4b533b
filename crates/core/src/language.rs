//! Supported content languages and their field naming scheme.
//!
//! Every resource stores one name and one description per language, in
//! fields suffixed with the language code (`name_en`, `description_ua`, ...).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;

/// A language code accepted by the localized read endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ru,
    En,
    Ua,
}

impl Language {
    /// All supported languages, in the order fields are laid out on a record.
    pub const ALL: [Language; 3] = [Language::Ru, Language::En, Language::Ua];

    pub fn code(self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
            Language::Ua => "ua",
        }
    }

    /// Document field holding the name in this language.
    pub fn name_field(self) -> &'static str {
        match self {
            Language::Ru => "name_ru",
            Language::En => "name_en",
            Language::Ua => "name_ua",
        }
    }

    /// Document field holding the description in this language.
    pub fn description_field(self) -> &'static str {
        match self {
            Language::Ru => "description_ru",
            Language::En => "description_en",
            Language::Ua => "description_ua",
        }
    }
}

impl FromStr for Language {
    type Err = CoreError;

    /// Codes are matched exactly; `EN` or `en-US` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ru" => Ok(Language::Ru),
            "en" => Ok(Language::En),
            "ua" => Ok(Language::Ua),
            other => Err(CoreError::InvalidLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
