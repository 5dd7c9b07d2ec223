//! Language type: the fixed set of languages a generated site is rendered in.
//!
//! Sites are always bilingual, so `Language` is a closed enum. Matching on it
//! is exhaustive, which keeps every bilingual lookup honest at compile time.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a language code is not one of the supported codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("Unknown language code: '{0}'")]
    Unknown(String),
}

/// A supported site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    /// All supported languages, in registry order.
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    /// Parse a language from an ISO 639-1 code.
    ///
    /// Surrounding whitespace and letter case are ignored, so `" ES "` parses
    /// as Spanish.
    ///
    /// # Example
    /// ```ignore
    /// let spanish = Language::from_code("es")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language, LanguageError> {
        let normalized = code.trim().to_ascii_lowercase();

        LanguageRegistry::get()
            .get_by_code(&normalized)
            .map(|config| config.language)
            .ok_or_else(|| LanguageError::Unknown(code.to_string()))
    }

    /// The language a site falls back to when its configuration does not
    /// name a valid default.
    pub fn canonical() -> Language {
        LanguageRegistry::get().canonical().language
    }

    /// The ISO 639-1 language code (e.g., "en", "es").
    pub fn code(self) -> &'static str {
        self.config().code
    }

    /// The registry entry for this language.
    pub fn config(self) -> &'static LanguageConfig {
        LanguageRegistry::get().describe(self)
    }

    /// The language name in English (e.g., "Spanish").
    pub fn name(self) -> &'static str {
        self.config().name
    }

    /// The language name in its own language (e.g., "Español").
    pub fn native_name(self) -> &'static str {
        self.config().native_name
    }

    /// The language a toggle switches to from this one.
    pub fn other(self) -> Language {
        match self {
            Language::English => Language::Spanish,
            Language::Spanish => Language::English,
        }
    }

    /// Position of this language in `Language::ALL` and in the registry.
    pub(crate) fn index(self) -> usize {
        match self {
            Language::English => 0,
            Language::Spanish => 1,
        }
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
