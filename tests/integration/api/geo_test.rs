//! Integration tests for the third-party discovery and geolocation client.

use ipgeo::egui_app::geo_api::GeoApiClient;

use crate::common::{sample_record, sample_record_json};

#[test]
fn test_discovers_own_ip() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/")
        .match_query(mockito::Matcher::UrlEncoded("format".into(), "json".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ip":"1.2.3.4"}"#)
        .create();

    let api = GeoApiClient::with_endpoints(format!("{}/?format=json", server.url()), server.url());
    let ip = api.fetch_own_ip().unwrap();

    assert_eq!(ip, "1.2.3.4");
    mock.assert();
}

#[test]
fn test_discovery_failure_is_an_error() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/")
        .match_query(mockito::Matcher::UrlEncoded("format".into(), "json".into()))
        .with_status(503)
        .create();

    let api = GeoApiClient::with_endpoints(format!("{}/?format=json", server.url()), server.url());
    let err = api.fetch_own_ip().unwrap_err();

    assert!(err.contains("IP discovery failed"), "unexpected error: {}", err);
}

#[test]
fn test_resolves_ip_to_record() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/8.8.8.8/geo")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(sample_record_json("8.8.8.8"))
        .create();

    let api = GeoApiClient::with_endpoints(server.url(), server.url());
    let record = api.fetch_geo("8.8.8.8").unwrap();

    assert_eq!(record, sample_record("8.8.8.8"));
    mock.assert();
}

#[test]
fn test_unresolvable_ip_yields_no_partial_record() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/203.0.113.9/geo")
        .with_status(404)
        .with_body("not found")
        .create();

    let api = GeoApiClient::with_endpoints(server.url(), server.url());
    let err = api.fetch_geo("203.0.113.9").unwrap_err();

    assert!(err.contains("Geo lookup failed"), "unexpected error: {}", err);
}

#[test]
fn test_malformed_body_is_a_parse_error() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/8.8.8.8/geo")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ip":"8.8.8.8"}"#)
        .create();

    let api = GeoApiClient::with_endpoints(server.url(), server.url());
    let err = api.fetch_geo("8.8.8.8").unwrap_err();

    assert!(err.contains("Failed to parse response"), "unexpected error: {}", err);
}
