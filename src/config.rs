use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "dist/static";

#[derive(Debug, Clone)]
pub struct Config {
    // Input
    pub site_config_path: PathBuf,

    // Output
    pub output_dir: PathBuf,

    /// Overrides the site's own `defaultLanguage`
    pub site_language: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            site_config_path: std::env::var("SITE_CONFIG_PATH")
                .context("SITE_CONFIG_PATH not set")?
                .into(),

            output_dir: std::env::var("OUTPUT_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string())
                .into(),

            site_language: std::env::var("SITE_LANGUAGE")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("SITE_CONFIG_PATH");
        std::env::remove_var("OUTPUT_DIR");
        std::env::remove_var("SITE_LANGUAGE");
    }

    #[test]
    #[serial]
    fn test_missing_site_config_path() {
        clear_env();

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("SITE_CONFIG_PATH not set"));
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        std::env::set_var("SITE_CONFIG_PATH", "site.json");

        let config = Config::from_env().unwrap();
        assert_eq!(config.site_config_path, PathBuf::from("site.json"));
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(config.site_language, None);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_all_values() {
        clear_env();
        std::env::set_var("SITE_CONFIG_PATH", "/srv/sites/clinica.json");
        std::env::set_var("OUTPUT_DIR", "/srv/www/clinica");
        std::env::set_var("SITE_LANGUAGE", "es");

        let config = Config::from_env().unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/srv/www/clinica"));
        assert_eq!(config.site_language.as_deref(), Some("es"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_values_use_defaults() {
        clear_env();
        std::env::set_var("SITE_CONFIG_PATH", "site.json");
        std::env::set_var("OUTPUT_DIR", "  ");
        std::env::set_var("SITE_LANGUAGE", "");

        let config = Config::from_env().unwrap();
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(config.site_language, None);

        clear_env();
    }
}
