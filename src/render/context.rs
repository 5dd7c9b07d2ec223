use crate::i18n::{localize, resolve, Bilingual, Language};
use crate::site::WebsiteConfig;

/// What every renderer receives: the site and the language to render it in.
///
/// Cheap to copy. Renderers never hold language state of their own; a
/// language change means building a new context.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    config: &'a WebsiteConfig,
    language: Language,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a WebsiteConfig, language: Language) -> Self {
        Self { config, language }
    }

    pub fn config(&self) -> &'a WebsiteConfig {
        self.config
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// UI string for `key`.
    pub fn t<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        resolve(Some(self.config), self.language, key)
    }

    /// Content field in the context language.
    pub fn localize<'f>(&self, field: Option<&'f Bilingual>) -> &'f str {
        localize(field, self.language)
    }

    /// Site root for `language`: `/` for the site's home language,
    /// `/<code>/` for the others.
    pub fn page_path(&self, language: Language) -> String {
        if language == self.config.home_language() {
            "/".to_string()
        } else {
            format!("/{}/", language.code())
        }
    }
}
