//! Geolocation API Client
//!
//! Wraps the two unauthenticated third-party lookups: own-IP discovery
//! and IP-to-geolocation resolution. Both are single-shot calls with no
//! retry, timeout, or backoff; a discovery failure must stop the own-geo
//! flow before the resolution step.

use reqwest::Client;
use tokio::runtime::Runtime;

use crate::shared::geo::{GeoRecord, IpResponse};

/// Own-IP discovery endpoint.
const IP_DISCOVERY_URL: &str = "https://api.ipify.org?format=json";

/// Geolocation endpoint prefix; `/{ip}/geo` is appended per lookup.
const GEO_LOOKUP_BASE: &str = "https://ipinfo.io";

/// Client for the third-party discovery and geolocation services.
pub struct GeoApiClient {
    client: Client,
    discovery_url: String,
    lookup_base: String,
}

impl GeoApiClient {
    pub fn new() -> Self {
        Self::with_endpoints(IP_DISCOVERY_URL, GEO_LOOKUP_BASE)
    }

    /// Client pointed at explicit endpoints. The production endpoints are
    /// fixed; this exists so tests can target a local mock server.
    pub fn with_endpoints(
        discovery_url: impl Into<String>,
        lookup_base: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            discovery_url: discovery_url.into(),
            lookup_base: lookup_base.into(),
        }
    }

    /// Discover the caller's public IP
    pub fn fetch_own_ip(&self) -> Result<String, String> {
        let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

        rt.block_on(async {
            let response = self
                .client
                .get(&self.discovery_url)
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
                return Err(format!("IP discovery failed: {} - {}", status, error_text));
            }

            let body: IpResponse = response
                .json()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))?;

            Ok(body.ip)
        })
    }

    /// Resolve `ip` into a [`GeoRecord`]. No partial record is returned
    /// on failure.
    pub fn fetch_geo(&self, ip: &str) -> Result<GeoRecord, String> {
        let url = format!("{}/{}/geo", self.lookup_base, ip);
        let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

        rt.block_on(async {
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
                return Err(format!("Geo lookup failed: {} - {}", status, error_text));
            }

            response
                .json::<GeoRecord>()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))
        })
    }
}

impl Default for GeoApiClient {
    fn default() -> Self {
        Self::new()
    }
}
