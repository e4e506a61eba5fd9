//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files including bind address, webhook secret,
//! database path, annotation backend and classifier settings.

use credence_classifier::ClassifierConfig;
use credence_nlp::AnnotatorBackend;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable that overrides the configured webhook secret
pub const WEBHOOK_SECRET_ENV: &str = "WEBHOOK_SECRET";

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Invalid setting
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8000)
    pub bind_port: u16,

    /// Bearer secret required on classification requests; none disables auth
    #[serde(default)]
    pub webhook_secret: Option<String>,

    /// SQLite database path
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Annotation provider
    #[serde(default)]
    pub annotator: AnnotatorBackend,

    /// Classifier settings
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

/// Default database path
fn default_database_path() -> String {
    "credence.db".to_string()
}

impl ServerConfig {
    /// Load configuration from a TOML file
    ///
    /// `WEBHOOK_SECRET` in the environment takes precedence over the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: ServerConfig = toml::from_str(&contents)?;

        config.apply_secret_override(std::env::var(WEBHOOK_SECRET_ENV).ok());
        config.validate()?;

        Ok(config)
    }

    /// Replace the webhook secret when an override is given
    ///
    /// Blank secrets count as unset.
    pub fn apply_secret_override(&mut self, secret: Option<String>) {
        if let Some(secret) = secret {
            self.webhook_secret = Some(secret);
        }
        if self
            .webhook_secret
            .as_deref()
            .is_some_and(|s| s.trim().is_empty())
        {
            self.webhook_secret = None;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_path.trim().is_empty() {
            return Err(ConfigError::Invalid("database_path must not be empty".to_string()));
        }
        self.annotator.validate().map_err(ConfigError::Invalid)?;
        self.classifier.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8000,
            webhook_secret: None,
            database_path: ":memory:".to_string(),
            annotator: AnnotatorBackend::Rules,
            classifier: ClassifierConfig::default(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
