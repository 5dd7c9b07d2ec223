//! Static site generation.
//!
//! Writes one complete page per supported language plus a shared stylesheet:
//!
//! ```text
//! <output_dir>/index.html      home language
//! <output_dir>/<code>/index.html  every other language
//! <output_dir>/style.css
//! ```

use crate::i18n::Language;
use crate::render::{page_to_html, RenderContext};
use crate::site::WebsiteConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Paths written by [`generate_static_site`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSite {
    pub output_dir: PathBuf,
    /// One page per language, home language first
    pub pages: Vec<(Language, PathBuf)>,
    pub stylesheet: PathBuf,
}

impl GeneratedSite {
    pub fn page(&self, language: Language) -> Option<&Path> {
        self.pages
            .iter()
            .find(|(lang, _)| *lang == language)
            .map(|(_, path)| path.as_path())
    }
}

/// Render `config` in every language and write the result to `output_dir`.
pub fn generate_static_site(config: &WebsiteConfig, output_dir: &Path) -> Result<GeneratedSite> {
    let home = config.home_language();
    info!(
        site = %config.name,
        home_language = home.code(),
        "Generating static site in {}",
        output_dir.display()
    );

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let languages = std::iter::once(home).chain(Language::ALL.into_iter().filter(|l| *l != home));

    let mut pages = Vec::new();
    for language in languages {
        let dir = if language == home {
            output_dir.to_path_buf()
        } else {
            output_dir.join(language.code())
        };
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;

        let path = dir.join("index.html");
        let html = page_to_html(&RenderContext::new(config, language));
        fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;

        debug!(language = language.code(), "Wrote {}", path.display());
        pages.push((language, path));
    }

    let stylesheet = output_dir.join("style.css");
    fs::write(&stylesheet, stylesheet_css(config))
        .with_context(|| format!("Failed to write {}", stylesheet.display()))?;

    info!("Generated {} pages", pages.len());

    Ok(GeneratedSite {
        output_dir: output_dir.to_path_buf(),
        pages,
        stylesheet,
    })
}

/// Site stylesheet with the theme exposed as CSS custom properties.
///
/// Only hex colors reach the stylesheet; see [`WebsiteConfig::theme`].
pub fn stylesheet_css(config: &WebsiteConfig) -> String {
    let theme = config.theme();

    format!(
        r#":root {{
  --primary: {primary};
  --secondary: {secondary};
  --background: {background};
  --light-gray: #F8F9FA;
  --dark-gray: #343A40;
}}

body {{
  margin: 0;
  font-family: 'Open Sans', sans-serif;
  background-color: var(--background);
  color: var(--dark-gray);
  scroll-behavior: smooth;
}}

h1, h2, h3 {{
  font-family: 'Montserrat', sans-serif;
  font-weight: 700;
}}

.section {{
  padding: 4rem 1.5rem;
}}

.section h2 {{
  color: var(--primary);
}}

.section-header {{
  background-color: var(--primary);
  color: var(--background);
}}

.section-footer {{
  background-color: var(--dark-gray);
  color: var(--background);
}}

.items {{
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
  gap: 1.5rem;
}}

.item {{
  background-color: var(--light-gray);
  border-radius: 0.5rem;
  padding: 1.5rem;
}}

.item img {{
  width: 100%;
  border-radius: 0.5rem;
  object-fit: cover;
}}

.rating {{
  color: #FFC107;
}}

.link-language-toggle,
.link-whatsapp {{
  background-color: var(--secondary);
  color: var(--background);
  border-radius: 0.25rem;
  padding: 0.5rem 1rem;
  text-decoration: none;
}}

.map {{
  width: 100%;
  min-height: 20rem;
  border: 0;
}}
"#,
        primary = theme.primary,
        secondary = theme.secondary,
        background = theme.background,
    )
}
