//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is a lazily built singleton (`OnceLock`) so every lookup of
//! language metadata goes through the same immutable table.

use crate::i18n::Language;
use std::sync::OnceLock;

/// Metadata for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// The language this entry describes
    pub language: Language,

    /// ISO 639-1 language code (e.g., "en", "es")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Spanish")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Español")
    pub native_name: &'static str,

    /// Whether this is the fallback language for sites without a valid default
    pub is_canonical: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// The code must already be normalized (lowercase, trimmed).
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get the configuration describing `language`.
    pub fn describe(&self, language: Language) -> &LanguageConfig {
        &self.languages[language.index()]
    }

    /// Get the canonical language configuration.
    ///
    /// Falls back to the first registered language if none is flagged.
    pub fn canonical(&self) -> &LanguageConfig {
        self.languages
            .iter()
            .find(|lang| lang.is_canonical)
            .unwrap_or(&self.languages[0])
    }
}

/// Default language configurations, indexed in `Language::ALL` order.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            language: Language::English,
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
        },
        LanguageConfig {
            language: Language::Spanish,
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_canonical: false,
        },
    ]
}
