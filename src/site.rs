//! Site configuration model.
//!
//! `WebsiteConfig` mirrors the JSON document the configuration store hands
//! out (camelCase keys). Parsing is deliberately forgiving: a partially
//! filled configuration must still produce a page, so missing flags take
//! their defaults, a broken collection is read as empty and a wrong-typed
//! optional value is read as unset.

use crate::i18n::{Bilingual, Language};
use anyhow::{Context, Result};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use tracing::warn;

pub const DEFAULT_PRIMARY_COLOR: &str = "#00A859";
pub const DEFAULT_SECONDARY_COLOR: &str = "#C8102E";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";

/// One client's website: identity, contact data, feature flags, theme and
/// bilingual content collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteConfig {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub default_language: Option<String>,

    // Feature flags
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub show_why_website_button: bool,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub show_domain_button: bool,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub show_chatbot: bool,

    // Contact
    #[serde(default, deserialize_with = "lenient")]
    pub whatsapp_number: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub whatsapp_message: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub facebook_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub google_maps_embed: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub office_hours: Option<OfficeHours>,
    #[serde(default, deserialize_with = "lenient")]
    pub analytics_code: Option<String>,

    // Theme
    #[serde(default, deserialize_with = "lenient")]
    pub primary_color: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub secondary_color: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub background_color: Option<String>,

    /// Per-site overrides of the built-in UI strings
    #[serde(default, deserialize_with = "lenient")]
    pub translations: Option<TranslationOverrides>,

    // Content collections, in display order
    #[serde(default, deserialize_with = "lenient_seq")]
    pub services: Vec<Service>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub reviews: Vec<Review>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub photos: Vec<Photo>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub awards: Vec<Award>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub chatbot_questions: Vec<ChatbotQuestion>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeHours {
    #[serde(default, deserialize_with = "null_as_default")]
    pub monday_to_friday: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub saturday: String,
}

/// Site-specific UI strings, one key table per language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationOverrides {
    #[serde(default, deserialize_with = "lenient_table")]
    pub en: HashMap<String, String>,
    #[serde(default, deserialize_with = "lenient_table")]
    pub es: HashMap<String, String>,
}

impl TranslationOverrides {
    pub fn table(&self, language: Language) -> &HashMap<String, String> {
        match language {
            Language::English => &self.en,
            Language::Spanish => &self.es,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(default)]
    pub title: Option<Bilingual>,
    #[serde(default)]
    pub description: Option<Bilingual>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub initials: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(default)]
    pub date: Option<Bilingual>,
    #[serde(default)]
    pub quote: Option<Bilingual>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub caption: Option<Bilingual>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(default)]
    pub title: Option<Bilingual>,
    #[serde(default)]
    pub description: Option<Bilingual>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatbotQuestion {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default)]
    pub question: Option<Bilingual>,
    #[serde(default)]
    pub answer: Option<Bilingual>,
}

/// Resolved theme colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme<'a> {
    pub primary: &'a str,
    pub secondary: &'a str,
    pub background: &'a str,
}

impl WebsiteConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse website configuration")
    }

    /// Load a configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read site configuration {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse site configuration {}", path.display()))
    }

    /// The language visitors land on: `defaultLanguage` when it names a
    /// supported language, otherwise the canonical one.
    pub fn home_language(&self) -> Language {
        self.default_language
            .as_deref()
            .and_then(|code| Language::from_code(code).ok())
            .unwrap_or_else(Language::canonical)
    }

    /// Theme colors with the stock palette filled in for unset values and
    /// for values that are not hex colors.
    pub fn theme(&self) -> Theme<'_> {
        Theme {
            primary: theme_color(&self.primary_color).unwrap_or(DEFAULT_PRIMARY_COLOR),
            secondary: theme_color(&self.secondary_color).unwrap_or(DEFAULT_SECONDARY_COLOR),
            background: theme_color(&self.background_color).unwrap_or(DEFAULT_BACKGROUND_COLOR),
        }
    }

    pub fn facebook_url(&self) -> Option<&str> {
        present(&self.facebook_url)
    }

    pub fn whatsapp_number(&self) -> Option<&str> {
        present(&self.whatsapp_number)
    }

    pub fn whatsapp_message(&self) -> Option<&str> {
        present(&self.whatsapp_message)
    }

    pub fn google_maps_embed(&self) -> Option<&str> {
        present(&self.google_maps_embed)
    }

    pub fn address(&self) -> Option<&str> {
        present(&self.address)
    }

    pub fn phone(&self) -> Option<&str> {
        present(&self.phone)
    }

    pub fn email(&self) -> Option<&str> {
        present(&self.email)
    }

    pub fn logo(&self) -> Option<&str> {
        present(&self.logo)
    }
}

impl Default for WebsiteConfig {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            logo: None,
            default_language: None,
            show_why_website_button: true,
            show_domain_button: true,
            show_chatbot: true,
            whatsapp_number: None,
            whatsapp_message: None,
            facebook_url: None,
            google_maps_embed: None,
            address: None,
            phone: None,
            email: None,
            office_hours: None,
            analytics_code: None,
            primary_color: None,
            secondary_color: None,
            background_color: None,
            translations: None,
            services: Vec::new(),
            reviews: Vec::new(),
            photos: Vec::new(),
            awards: Vec::new(),
            chatbot_questions: Vec::new(),
        }
    }
}

/// An optional scalar that counts as set only when it holds non-blank text.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn theme_color(value: &Option<String>) -> Option<&str> {
    present(value).filter(|color| is_hex_color(color))
}

static COLOR_REGEX: OnceLock<Regex> = OnceLock::new();

/// `#RGB` or `#RRGGBB`.
pub fn is_hex_color(value: &str) -> bool {
    let regex = COLOR_REGEX
        .get_or_init(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());
    regex.is_match(value)
}

fn default_true() -> bool {
    true
}

fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read an optional value, treating one of the wrong shape as unset.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }

    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            warn!("Ignoring malformed value in site configuration: {}", e);
            Ok(None)
        }
    }
}

/// Read an override table, keeping only the keys that map to text.
fn lenient_table<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Value::deserialize(deserializer)? {
        Value::Object(entries) => entries,
        Value::Null => return Ok(HashMap::new()),
        other => {
            warn!("Expected a translation table, found {}; ignoring it", other);
            return Ok(HashMap::new());
        }
    };

    Ok(entries
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(text) => Some((key, text)),
            Value::Null => None,
            other => {
                warn!("Ignoring translation '{}': expected text, found {}", key, other);
                None
            }
        })
        .collect())
}

/// Read a collection without ever failing the whole configuration.
///
/// Anything that is not an array reads as empty. Array entries that do not
/// fit the item shape are dropped; the rest keep their order.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;

    let entries = match value {
        Value::Array(entries) => entries,
        Value::Null => return Ok(Vec::new()),
        other => {
            warn!("Expected a list in site configuration, found {}; ignoring it", other);
            return Ok(Vec::new());
        }
    };

    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Skipping malformed collection entry {}: {}", index, e);
                None
            }
        })
        .collect())
}
