//! Configuration validation.
//!
//! Finds translation gaps and malformed theme values in a site
//! configuration. Rendering never depends on the report; it exists so an
//! operator can fix a site before a client sees half-translated content.

use crate::i18n::{Bilingual, Language};
use crate::site::{is_hex_color, WebsiteConfig};

/// Validation report containing errors and warnings about a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Values that will render incorrectly (e.g., broken theme colors)
    pub errors: Vec<String>,

    /// Content gaps that render as empty or fallback text
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for site configurations.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a site configuration.
    ///
    /// Checks that:
    /// - `defaultLanguage`, when set, is a supported code
    /// - theme colors are `#RGB` or `#RRGGBB` hex values
    /// - every bilingual field has text in both languages
    /// - every override key exists in both language tables
    pub fn validate(config: &WebsiteConfig) -> ValidationReport {
        let mut report = ValidationReport::new();

        if let Some(code) = config.default_language.as_deref() {
            if Language::from_code(code).is_err() {
                report.warnings.push(format!(
                    "defaultLanguage '{}' is not supported, English will be used",
                    code
                ));
            }
        }

        for (field, value) in [
            ("primaryColor", &config.primary_color),
            ("secondaryColor", &config.secondary_color),
            ("backgroundColor", &config.background_color),
        ] {
            if let Some(color) = value.as_deref().filter(|c| !c.is_empty()) {
                if !is_hex_color(color) {
                    report
                        .errors
                        .push(format!("{} '{}' is not a hex color", field, color));
                }
            }
        }

        for (index, service) in config.services.iter().enumerate() {
            let fields = [
                ("title", service.title.as_ref()),
                ("description", service.description.as_ref()),
            ];
            Self::check_fields(&mut report, "services", index, fields);
        }
        for (index, review) in config.reviews.iter().enumerate() {
            let fields = [("quote", review.quote.as_ref()), ("date", review.date.as_ref())];
            Self::check_fields(&mut report, "reviews", index, fields);
        }
        for (index, photo) in config.photos.iter().enumerate() {
            Self::check_fields(&mut report, "photos", index, [("caption", photo.caption.as_ref())]);
        }
        for (index, award) in config.awards.iter().enumerate() {
            let fields = [
                ("title", award.title.as_ref()),
                ("description", award.description.as_ref()),
            ];
            Self::check_fields(&mut report, "awards", index, fields);
        }
        for (index, question) in config.chatbot_questions.iter().enumerate() {
            let fields = [
                ("question", question.question.as_ref()),
                ("answer", question.answer.as_ref()),
            ];
            Self::check_fields(&mut report, "chatbotQuestions", index, fields);
        }

        if let Some(overrides) = &config.translations {
            let mut only_en: Vec<_> = overrides
                .en
                .keys()
                .filter(|key| !overrides.es.contains_key(*key))
                .collect();
            let mut only_es: Vec<_> = overrides
                .es
                .keys()
                .filter(|key| !overrides.en.contains_key(*key))
                .collect();
            only_en.sort();
            only_es.sort();

            for key in only_en {
                report
                    .warnings
                    .push(format!("translations.en.{} has no Spanish counterpart", key));
            }
            for key in only_es {
                report
                    .warnings
                    .push(format!("translations.es.{} has no English counterpart", key));
            }
        }

        report
    }

    fn check_fields<const N: usize>(
        report: &mut ValidationReport,
        collection: &str,
        index: usize,
        fields: [(&str, Option<&Bilingual>); N],
    ) {
        for (field, value) in fields {
            match value {
                None => report
                    .warnings
                    .push(format!("{}[{}].{} is missing", collection, index, field)),
                Some(value) if value.is_partial() => {
                    let missing = if value.en.trim().is_empty() {
                        Language::English
                    } else {
                        Language::Spanish
                    };
                    report.warnings.push(format!(
                        "{}[{}].{} has no {} text",
                        collection,
                        index,
                        field,
                        missing.name()
                    ));
                }
                Some(_) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> WebsiteConfig {
        serde_json::from_value(value).unwrap()
    }

    // ==================== Color Tests ====================

    #[test]
    fn test_invalid_color_is_error() {
        let report = ConfigValidator::validate(&parse(json!({"primaryColor": "green"})));
        assert!(report.has_errors());
        assert!(report.errors[0].contains("primaryColor"));
    }

    // ==================== Language Tests ====================

    #[test]
    fn test_unsupported_default_language_warns() {
        let report = ConfigValidator::validate(&parse(json!({"defaultLanguage": "fr"})));
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("defaultLanguage 'fr'"));
    }

    // ==================== Bilingual Field Tests ====================

    #[test]
    fn test_complete_config_is_clean() {
        let config = parse(json!({
            "defaultLanguage": "es",
            "primaryColor": "#00A859",
            "services": [{
                "icon": "briefcase",
                "title": {"en": "Consulting", "es": "Consultoría"},
                "description": {"en": "A", "es": "B"}
            }],
            "translations": {"en": {"tagline": "Hi"}, "es": {"tagline": "Hola"}}
        }));

        assert!(ConfigValidator::validate(&config).is_clean());
    }

    #[test]
    fn test_partial_field_warns() {
        let config = parse(json!({
            "photos": [{"url": "a.jpg", "caption": {"en": "Lobby"}}]
        }));

        let report = ConfigValidator::validate(&config);
        assert_eq!(report.warnings, vec!["photos[0].caption has no Spanish text"]);
    }

    #[test]
    fn test_missing_field_warns() {
        let config = parse(json!({
            "awards": [{"icon": "award", "title": {"en": "Best", "es": "Mejor"}}]
        }));

        let report = ConfigValidator::validate(&config);
        assert_eq!(report.warnings, vec!["awards[0].description is missing"]);
    }

    // ==================== Override Table Tests ====================

    #[test]
    fn test_one_sided_override_warns() {
        let config = parse(json!({
            "translations": {"en": {"tagline": "Hi", "bio": "Bio"}, "es": {"tagline": "Hola"}}
        }));

        let report = ConfigValidator::validate(&config);
        assert_eq!(
            report.warnings,
            vec!["translations.en.bio has no Spanish counterpart"]
        );
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_error() {
        let mut report = ValidationReport::new();
        report.errors.push("Test error".to_string());

        assert!(!report.is_clean());
        assert!(report.has_errors());
        assert!(!report.has_warnings());
    }
}
