use crate::i18n::{Language, LanguageError};
use crate::render::RenderContext;
use crate::site::WebsiteConfig;
use tracing::debug;

/// Language state controller.
///
/// Holds the one mutable value of the rendering pipeline: the language the
/// visitor is currently reading. The host owns it and hands the current
/// language to renderers by value, through [`LanguageState::context`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageState {
    language: Language,
}

impl LanguageState {
    /// Start in the site's default language, or the canonical language when
    /// the site names none or an unsupported one.
    pub fn new(config: &WebsiteConfig) -> Self {
        Self {
            language: config.home_language(),
        }
    }

    pub fn with_language(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch to the other supported language.
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.other();
        debug!(language = self.language.code(), "Language toggled");
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Set the language from a code; the state is unchanged on error.
    pub fn set_language_code(&mut self, code: &str) -> Result<(), LanguageError> {
        self.language = Language::from_code(code)?;
        Ok(())
    }

    /// Render context for `config` in the current language.
    pub fn context<'a>(&self, config: &'a WebsiteConfig) -> RenderContext<'a> {
        RenderContext::new(config, self.language)
    }

    /// Toggle button text: the native name of the language it switches to.
    pub fn toggle_label(&self) -> &'static str {
        self.language.other().native_name()
    }

    /// Toggle button accessible label (e.g., "Switch to Spanish").
    pub fn toggle_aria_label(&self) -> String {
        format!("Switch to {}", self.language.other().name())
    }
}

impl Default for LanguageState {
    fn default() -> Self {
        Self::with_language(Language::canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config_with_default(code: Option<&str>) -> WebsiteConfig {
        WebsiteConfig {
            default_language: code.map(str::to_string),
            ..WebsiteConfig::default()
        }
    }

    // ==================== Initial State Tests ====================

    #[test]
    fn test_initial_from_config() {
        let state = LanguageState::new(&config_with_default(Some("es")));
        assert_eq!(state.language(), Language::Spanish);
    }

    #[test]
    fn test_initial_without_default_is_english() {
        let state = LanguageState::new(&config_with_default(None));
        assert_eq!(state.language(), Language::English);
    }

    #[test]
    fn test_initial_with_invalid_default_is_english() {
        let state = LanguageState::new(&config_with_default(Some("pt")));
        assert_eq!(state.language(), Language::English);
    }

    // ==================== Transition Tests ====================

    #[test]
    fn test_toggle_en_es_en() {
        let mut state = LanguageState::with_language(Language::English);
        assert_eq!(state.toggle_language(), Language::Spanish);
        assert_eq!(state.toggle_language(), Language::English);
        assert_eq!(state.language(), Language::English);
    }

    #[test]
    fn test_set_language_is_idempotent() {
        let mut state = LanguageState::default();
        state.set_language(Language::Spanish);
        state.set_language(Language::Spanish);
        assert_eq!(state.language(), Language::Spanish);
    }

    #[test]
    fn test_set_language_code() {
        let mut state = LanguageState::default();
        state.set_language_code("es").unwrap();
        assert_eq!(state.language(), Language::Spanish);
    }

    #[test]
    fn test_set_language_code_invalid_keeps_state() {
        let mut state = LanguageState::with_language(Language::Spanish);
        let err = state.set_language_code("de").unwrap_err();
        assert_eq!(err, LanguageError::Unknown("de".to_string()));
        assert_eq!(state.language(), Language::Spanish);
    }

    #[test]
    fn test_change_visible_to_next_context() {
        let config = WebsiteConfig::default();
        let mut state = LanguageState::default();
        state.toggle_language();
        assert_eq!(state.context(&config).language(), Language::Spanish);
    }

    // ==================== Toggle Label Tests ====================

    #[test]
    fn test_toggle_labels() {
        let english = LanguageState::with_language(Language::English);
        assert_eq!(english.toggle_label(), "Español");
        assert_eq!(english.toggle_aria_label(), "Switch to Spanish");

        let spanish = LanguageState::with_language(Language::Spanish);
        assert_eq!(spanish.toggle_label(), "English");
        assert_eq!(spanish.toggle_aria_label(), "Switch to English");
    }

    proptest! {
        #[test]
        fn prop_double_toggle_is_identity(start_spanish in any::<bool>()) {
            let start = if start_spanish { Language::Spanish } else { Language::English };
            let mut state = LanguageState::with_language(start);
            state.toggle_language();
            state.toggle_language();
            prop_assert_eq!(state.language(), start);
        }
    }
}
