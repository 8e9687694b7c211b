//! Configuration loader
//!
//! Handles loading configuration from TOML files and environment variables
//! using Figment.

use crate::config::{LoggingConfig, PropertyStore};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;
use dbpool_domain::error::Result;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load properties from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. TOML configuration file (explicit path, else first default location found)
    /// 2. Environment variables with prefix, nesting on `__`
    ///    (e.g. `DBPOOL_DB__DEFAULT__SERVER` sets `db.default.server`)
    ///
    /// File values are flattened to strings; environment values are kept
    /// verbatim so credentials such as `007` or `[abc]` are not re-typed.
    pub fn load(&self) -> Result<PropertyStore> {
        let mut store = PropertyStore::from_figment(&self.file_figment())?;
        store.extend(
            self.env()
                .iter()
                .map(|(key, value)| (key.as_str().to_string(), value)),
        );
        Ok(store)
    }

    /// Load the `logging` section, falling back to defaults per field
    pub fn load_logging(&self) -> Result<LoggingConfig> {
        Figment::new()
            .merge(Serialized::default("logging", LoggingConfig::default()))
            .merge(self.file_figment())
            .merge(self.env())
            .extract_inner("logging")
            .config_context("Failed to extract logging configuration")
    }

    fn file_figment(&self) -> Figment {
        let mut figment = Figment::new();

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment
    }

    fn env(&self) -> Env {
        Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR)
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}
