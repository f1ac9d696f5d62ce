//! Application configuration module
//!
//! Provides configuration types for the application.

use thiserror::Error;

/// Static application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Base URL of the first-party API, expected to end with `/`.
    pub api_base_url: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    api_base_url: Option<String>,
}

impl AppConfigBuilder {
    /// Set the first-party API base URL
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        if let Some(url) = &self.api_base_url {
            if url.is_empty() {
                return Err(ConfigError::MissingValue("api_base_url"));
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(AppConfig {
            api_base_url: self.api_base_url,
        })
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
