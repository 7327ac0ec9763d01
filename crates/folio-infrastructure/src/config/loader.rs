//! Configuration loader
//!
//! Sources are merged in this order (later sources override earlier):
//! 1. `AppConfig::default()`
//! 2. TOML configuration file (explicit path, else the first default location found)
//! 3. Environment variables, e.g. `FOLIO_BOOK__ROOT` or `FOLIO_CHECKS__STRICT`

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use crate::store::build_globset;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use folio_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// An explicit config path that does not exist is an error; a missing
    /// default file is not.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if !config_path.exists() {
                log_config_loaded(config_path, false);
                return Err(Error::config(format!(
                    "Configuration file not found: {}",
                    config_path.display()
                )));
            }
            figment = figment.merge(Toml::file(config_path));
            log_config_loaded(config_path, true);
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Render a configuration as TOML
    pub fn to_toml(config: &AppConfig) -> Result<String> {
        toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")
    }

    /// First existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let mut candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }

        candidates.into_iter().find(|path| path.exists())
    }
}

/// Validate application configuration
fn validate_app_config(config: &AppConfig) -> Result<()> {
    if config.book.summary.as_os_str().is_empty() {
        return Err(Error::config("book.summary cannot be empty"));
    }
    parse_log_level(&config.logging.level)?;
    build_globset(&config.book.exclude)?;
    if config.checks.known_dialects.iter().any(|d| d.trim().is_empty()) {
        return Err(Error::config("checks.known_dialects cannot contain empty entries"));
    }
    Ok(())
}
