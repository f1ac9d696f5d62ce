//! Wire types for the geolocation and history services.

use serde::{Deserialize, Serialize};

/// Geolocation data for a single IP, as returned by the geolocation
/// service and read back from the search history.
///
/// A record has no identity beyond its `ip` field and is never mutated;
/// each lookup produces a fresh value that replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoRecord {
    pub ip: String,
    pub city: String,
    pub region: String,
    pub country: String,
    /// Latitude and longitude as a single `"lat,long"` string.
    pub loc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,
}

/// Payload returned by the own-IP discovery endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpResponse {
    pub ip: String,
}
