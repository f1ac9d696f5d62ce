//! Shared test helpers.

use ipgeo::shared::geo::GeoRecord;

/// A fully-populated record, as the geolocation service would return it.
pub fn sample_record(ip: &str) -> GeoRecord {
    GeoRecord {
        ip: ip.to_string(),
        city: "Mountain View".to_string(),
        region: "California".to_string(),
        country: "US".to_string(),
        loc: "37.4056,-122.0775".to_string(),
        org: Some("AS15169 Google LLC".to_string()),
        postal: Some("94043".to_string()),
        timezone: Some("America/Los_Angeles".to_string()),
        readme: None,
    }
}

/// JSON body for [`sample_record`].
pub fn sample_record_json(ip: &str) -> String {
    serde_json::to_string(&sample_record(ip)).expect("record serializes")
}
