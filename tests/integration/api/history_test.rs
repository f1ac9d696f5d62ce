//! Integration tests for the first-party history client.

use pretty_assertions::assert_eq;

use ipgeo::egui_app::history_api::HistoryApiClient;
use ipgeo::egui_app::Config;
use ipgeo::shared::config::AppConfig;

use crate::common::{sample_record, sample_record_json};

fn config_for(server: &mockito::ServerGuard, token: Option<&str>) -> Config {
    let mut config =
        Config::with_builder(AppConfig::builder().api_base_url(format!("{}/", server.url())))
            .unwrap();
    config.set_token(token.map(str::to_string));
    config
}

#[test]
fn test_list_sends_bearer_token_and_decodes_records() {
    let mut server = mockito::Server::new();
    let body = format!(
        "[{},{}]",
        sample_record_json("8.8.8.8"),
        sample_record_json("1.1.1.1")
    );
    let mock = server
        .mock("GET", "/history")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create();

    let api = HistoryApiClient::new(config_for(&server, Some("test-token")));
    let records = api.list().unwrap();

    assert_eq!(
        records,
        vec![sample_record("8.8.8.8"), sample_record("1.1.1.1")]
    );
    mock.assert();
}

#[test]
fn test_list_without_session_fails_before_the_network() {
    let server = mockito::Server::new();

    let api = HistoryApiClient::new(config_for(&server, None));
    let err = api.list().unwrap_err();

    assert_eq!(err, "Not authenticated");
}

#[test]
fn test_list_propagates_server_rejection() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/history")
        .with_status(401)
        .with_body("token expired")
        .create();

    let api = HistoryApiClient::new(config_for(&server, Some("stale-token")));
    let err = api.list().unwrap_err();

    assert!(err.contains("History fetch failed"), "unexpected error: {}", err);
}

#[test]
fn test_create_posts_the_record() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/history/create")
        .match_header("authorization", "Bearer test-token")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "ip": "8.8.8.8",
            "city": "Mountain View"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"created"}"#)
        .create();

    let api = HistoryApiClient::new(config_for(&server, Some("test-token")));
    api.create(&sample_record("8.8.8.8")).unwrap();

    mock.assert();
}

#[test]
fn test_create_failure_is_an_error() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/history/create")
        .with_status(500)
        .create();

    let api = HistoryApiClient::new(config_for(&server, Some("test-token")));
    let err = api.create(&sample_record("8.8.8.8")).unwrap_err();

    assert!(err.contains("History save failed"), "unexpected error: {}", err);
}
