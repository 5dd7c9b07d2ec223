use anyhow::{Context, Result};
use tracing::{error, info, warn};
use websitio::config::Config;
use websitio::generator::generate_static_site;
use websitio::i18n::{ConfigValidator, Language, TranslationMetrics};
use websitio::site::WebsiteConfig;

fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("websitio=info".parse()?)
        )
        .init();

    info!("Starting static site generation");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Step 1: Load the site configuration
    info!("Loading site configuration from {}", config.site_config_path.display());
    let mut site = WebsiteConfig::from_path(&config.site_config_path)?;

    if let Some(code) = &config.site_language {
        let language = Language::from_code(code).context("Invalid SITE_LANGUAGE")?;
        info!("Using {} as the home language", language.name());
        site.default_language = Some(language.code().to_string());
    }

    // Step 2: Check it for translation gaps
    let report = ConfigValidator::validate(&site);
    for warning in &report.warnings {
        warn!("{}", warning);
    }
    for problem in &report.errors {
        error!("{}", problem);
    }
    if report.is_clean() {
        info!("Site configuration is complete in every language");
    }

    // Step 3: Render and write every page
    let generated = generate_static_site(&site, &config.output_dir)?;
    for (language, path) in &generated.pages {
        info!("{} page: {}", language.name(), path.display());
    }
    info!("Stylesheet: {}", generated.stylesheet.display());

    let metrics = TranslationMetrics::global().report();
    if metrics.fallbacks > 0 {
        warn!(
            "{} of {} UI strings had no translation ({:.1}%)",
            metrics.fallbacks, metrics.total_lookups, metrics.fallback_rate
        );
    }

    info!("Site generated successfully!");
    Ok(())
}
