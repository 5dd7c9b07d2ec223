//! Internationalization (i18n) module for bilingual site rendering.
//!
//! Everything a section renderer needs to turn configuration data into
//! display text for one language lives here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages and their metadata
//! - `language`: Type-safe `Language` value parsed from ISO 639-1 codes
//! - `bilingual`: Fixed-shape `{en, es}` field record and the `localize` accessor
//! - `strings`: Built-in UI string table (key -> English/Spanish)
//! - `resolver`: Key lookup with per-site overrides and key fallback
//! - `state`: Language state controller owned by the host (toggle/set)
//! - `validator`: Translation completeness checks for a site configuration
//! - `metrics`: Lookup counters for spotting missing translations
//!
//! # Example
//!
//! ```rust,ignore
//! use websitio::i18n::{resolve, Language, LanguageState};
//!
//! let mut state = LanguageState::new(&site);
//! state.toggle_language();
//!
//! let title = resolve(Some(&site), state.language(), "servicesTitle");
//! ```

mod bilingual;
mod language;
mod metrics;
mod registry;
mod resolver;
mod state;
mod strings;
mod validator;

pub use bilingual::{localize, Bilingual};
pub use language::{Language, LanguageError};
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::resolve;
pub use state::LanguageState;
pub use strings::{default_translation, TranslationEntry, DEFAULT_TRANSLATIONS};
pub use validator::{ConfigValidator, ValidationReport};
