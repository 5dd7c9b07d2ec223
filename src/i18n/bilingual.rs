use crate::i18n::Language;
use serde::{Deserialize, Deserializer, Serialize};

/// A value stored once per supported language.
///
/// Either member may be missing or `null` in the configuration JSON; it is
/// read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub en: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub es: String,
}

impl Bilingual {
    pub fn new(en: impl Into<String>, es: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            es: es.into(),
        }
    }

    /// The member for `language`.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::English => &self.en,
            Language::Spanish => &self.es,
        }
    }

    /// Whether one language has text and the other does not.
    pub fn is_partial(&self) -> bool {
        self.en.trim().is_empty() != self.es.trim().is_empty()
    }
}

/// Localized-value accessor.
///
/// Returns the member matching `language`, or `""` when the field itself is
/// absent. A member left empty stays empty: there is no fallback to the
/// other language.
pub fn localize(field: Option<&Bilingual>, language: Language) -> &str {
    field.map(|value| value.get(language)).unwrap_or("")
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_localize_present_field() {
        let field = Bilingual::new("Consulting", "Consultoría");
        assert_eq!(localize(Some(&field), Language::English), "Consulting");
        assert_eq!(localize(Some(&field), Language::Spanish), "Consultoría");
    }

    #[test]
    fn test_localize_absent_field_is_empty() {
        assert_eq!(localize(None, Language::English), "");
        assert_eq!(localize(None, Language::Spanish), "");
    }

    #[test]
    fn test_missing_member_deserializes_empty() {
        let field: Bilingual = serde_json::from_str(r#"{"en": "Only English"}"#).unwrap();
        assert_eq!(localize(Some(&field), Language::English), "Only English");
        assert_eq!(localize(Some(&field), Language::Spanish), "");
    }

    #[test]
    fn test_null_member_deserializes_empty() {
        let field: Bilingual = serde_json::from_str(r#"{"en": null, "es": "Hola"}"#).unwrap();
        assert_eq!(field.en, "");
        assert_eq!(field.es, "Hola");
    }

    #[test]
    fn test_is_partial() {
        assert!(Bilingual::new("Hello", "").is_partial());
        assert!(Bilingual::new("", "Hola").is_partial());
        assert!(!Bilingual::new("Hello", "Hola").is_partial());
        assert!(!Bilingual::default().is_partial());
    }

    proptest! {
        #[test]
        fn prop_localize_returns_member(en in ".*", es in ".*") {
            let field = Bilingual::new(en.clone(), es.clone());
            prop_assert_eq!(localize(Some(&field), Language::English), en.as_str());
            prop_assert_eq!(localize(Some(&field), Language::Spanish), es.as_str());
        }
    }
}
