use crate::i18n::{default_translation, Language, TranslationMetrics};
use crate::site::WebsiteConfig;
use tracing::debug;

/// Resolve a UI string key for `language`.
///
/// Lookup order:
/// 1. the site's own override table, when it has a non-empty value
/// 2. the built-in table
/// 3. the key itself
///
/// Never fails. An unresolved key comes back verbatim so the gap is visible
/// on the rendered page.
pub fn resolve<'a>(config: Option<&'a WebsiteConfig>, language: Language, key: &'a str) -> &'a str {
    let metrics = TranslationMetrics::global();

    let overridden = config
        .and_then(|config| config.translations.as_ref())
        .and_then(|overrides| overrides.table(language).get(key))
        .filter(|value| !value.is_empty());

    if let Some(value) = overridden {
        metrics.record_override_hit();
        return value;
    }

    if let Some(value) = default_translation(language, key) {
        metrics.record_default_hit();
        return value;
    }

    metrics.record_fallback();
    debug!(key, language = language.code(), "No translation found, using key");
    key
}
