//! Configuration management for the Warehouse Console
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with WMS_ prefix
//! 4. Command-line overrides

use std::path::Path;
use std::time::Duration;

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::Language;

/// Main console configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Backend API configuration
    pub api: ApiConfig,

    /// Search box behaviour
    pub search: SearchConfig,

    /// Display preferences
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the warehouse REST backend
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Whether the backend accepts `PUT /transactions/{id}`
    pub transaction_updates: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a search fetch
    pub debounce_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    pub language: Language,
}

/// Values given on the command line, applied over files and environment
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub language: Option<Language>,
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load configuration from a specific directory with CLI overrides
    pub fn load_from(config_dir: &Path, overrides: &Overrides) -> Result<Self, ConfigError> {
        let environment = std::env::var("WMS_ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let file = config_dir.join(&environment);

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", "http://localhost:8000")?
            .set_default("api.timeout_secs", 30)?
            .set_default("api.transaction_updates", false)?
            .set_default("search.debounce_ms", 300)?
            .set_default("ui.language", Language::default().code())?
            // Load environment-specific config file
            .add_source(File::with_name(&file.to_string_lossy()).required(false))
            // Override with environment variables (WMS_ prefix)
            .add_source(
                Environment::with_prefix("WMS")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("api.base_url", overrides.base_url.clone())?
            .set_override_option("ui.language", overrides.language.map(|l| l.code()))?
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Message(format!(
                "api.base_url must be an http(s) URL, got {:?}",
                self.api.base_url
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Message(
                "api.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            api: ApiConfig {
                base_url: "http://localhost:8000".to_string(),
                timeout_secs: 30,
                transaction_updates: false,
            },
            search: SearchConfig { debounce_ms: 300 },
            ui: UiConfig {
                language: Language::default(),
            },
        }
    }
}
