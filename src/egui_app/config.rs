use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Environment variable supplying the first-party API base URL.
const API_URL_ENV: &str = "IPGEO_API_URL";

/// Rendered into request URLs when no base URL is configured. A missing
/// base URL breaks first-party requests visibly instead of aborting
/// startup.
const API_URL_PLACEHOLDER: &str = "No API URL set";

/// Client configuration: the first-party base URL plus the session token.
///
/// The token is the whole session. It is set when the user supplies one,
/// consulted by every authenticated call, cleared on logout, and dies
/// with the process.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
    token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let app = std::env::var(API_URL_ENV)
            .ok()
            .and_then(|url| match AppConfig::builder().api_base_url(url).build() {
                Ok(app) => Some(app),
                Err(e) => {
                    tracing::warn!("ignoring {}: {}", API_URL_ENV, e);
                    None
                }
            })
            .unwrap_or_default();
        Self { app, token: None }
    }
}

impl Config {
    /// Create a new configuration from the environment
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self {
            app: builder.build()?,
            token: None,
        })
    }

    /// Set the session token
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Get the session token
    pub fn get_token(&self) -> Option<&String> {
        self.token.as_ref()
    }

    /// Clear the token (logout)
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Whether a session token is currently held
    pub fn has_session(&self) -> bool {
        self.token.is_some()
    }

    /// Get the full URL for a first-party endpoint. `path` carries no
    /// leading slash; the base URL is expected to end with one.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url(), path)
    }

    pub fn api_base_url(&self) -> &str {
        self.app.api_base_url.as_deref().unwrap_or(API_URL_PLACEHOLDER)
    }
}
