//! Preview binary - renders a site to stdout without writing any files
//!
//! Usage:
//!   cargo run --bin preview                          # Full page, home language
//!   cargo run --bin preview -- --lang es             # Full page in Spanish
//!   cargo run --bin preview -- --section services    # One section as HTML
//!   cargo run --bin preview -- --section reviews --json
//!   cargo run --bin preview -- --lang es --ask "¿Cuál es su horario?"
//!
//! Required environment variables:
//! - SITE_CONFIG_PATH
//!
//! Optional:
//! - SITE_LANGUAGE (used when --lang is not given)

use anyhow::{bail, Context, Result};
use tracing::info;
use websitio::chatbot::chatbot_reply;
use websitio::config::Config;
use websitio::i18n::LanguageState;
use websitio::render::{page_to_html, render_page, render_section, section_to_html, SectionId};
use websitio::site::WebsiteConfig;

/// Command line options
#[derive(Debug, Default)]
struct PreviewArgs {
    language: Option<String>,
    section: Option<String>,
    question: Option<String>,
    json: bool,
}

impl PreviewArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => parsed.json = true,
                "--lang" => {
                    parsed.language = Some(args.next().context("--lang needs a language code")?)
                }
                "--section" => {
                    parsed.section = Some(args.next().context("--section needs a section name")?)
                }
                "--ask" => parsed.question = Some(args.next().context("--ask needs a question")?),
                other => bail!("Unknown argument: {}", other),
            }
        }

        Ok(parsed)
    }
}

fn main() -> Result<()> {
    // Initialize logging (stderr, so stdout stays clean for piping)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("websitio=info".parse()?),
        )
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    let args = PreviewArgs::parse(std::env::args().skip(1))?;

    info!("Loading configuration...");
    let config = Config::from_env()?;
    let site = WebsiteConfig::from_path(&config.site_config_path)?;

    let mut state = LanguageState::new(&site);
    if let Some(code) = args.language.as_deref().or(config.site_language.as_deref()) {
        state
            .set_language_code(code)
            .with_context(|| format!("Cannot preview in '{}'", code))?;
    }
    let ctx = state.context(&site);
    info!(
        "Previewing '{}' in {} (toggle: {})",
        site.name,
        state.language().name(),
        state.toggle_label()
    );

    if let Some(question) = &args.question {
        println!("{}", chatbot_reply(&ctx, question));
        return Ok(());
    }

    let section = match args.section.as_deref() {
        Some(name) => Some(SectionId::from_name(name).with_context(|| {
            let known: Vec<_> = SectionId::PAGE_ORDER.iter().map(|id| id.name()).collect();
            format!("Unknown section '{}'. Known sections: {}", name, known.join(", "))
        })?),
        None => None,
    };

    let output = match (section, args.json) {
        (Some(id), true) => serde_json::to_string_pretty(&render_section(&ctx, id))?,
        (Some(id), false) => section_to_html(&render_section(&ctx, id)),
        (None, true) => serde_json::to_string_pretty(&render_page(&ctx))?,
        (None, false) => page_to_html(&ctx),
    };

    if output.is_empty() {
        eprintln!("(section is empty in {})", state.language().name());
    } else {
        println!("{}", output);
    }

    Ok(())
}
