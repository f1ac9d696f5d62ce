//! Search History API Client
//!
//! Authenticated calls against the first-party history endpoints. Both
//! attach the session token as a bearer credential; there is no token
//! refresh, so an expired token simply surfaces as request failures.

use reqwest::Client;
use tokio::runtime::Runtime;

use crate::egui_app::config::Config;
use crate::shared::geo::GeoRecord;

/// History API client
pub struct HistoryApiClient {
    config: Config,
    client: Client,
}

impl HistoryApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Fetch the stored search history, in whatever order the server
    /// returns it.
    pub fn list(&self) -> Result<Vec<GeoRecord>, String> {
        let url = self.config.api_url("history");
        let token = self.config.get_token().ok_or("Not authenticated")?;

        let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

        rt.block_on(async {
            let response = self
                .client
                .get(&url)
                .header("Authorization", format!("Bearer {}", token))
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
                return Err(format!("History fetch failed: {} - {}", status, error_text));
            }

            response
                .json::<Vec<GeoRecord>>()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))
        })
    }

    /// Persist a looked-up record. The response body shape is unused.
    pub fn create(&self, record: &GeoRecord) -> Result<(), String> {
        let url = self.config.api_url("history/create");
        let token = self.config.get_token().ok_or("Not authenticated")?;

        let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

        rt.block_on(async {
            let response = self
                .client
                .post(&url)
                .header("Authorization", format!("Bearer {}", token))
                .header("Content-Type", "application/json")
                .json(record)
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
                return Err(format!("History save failed: {} - {}", status, error_text));
            }

            let body = response.text().await.unwrap_or_default();
            tracing::debug!("history create response: {}", body);
            Ok(())
        })
    }
}
