//! Integration tests for the register/logout client functions.

use ipgeo::egui_app::auth::{logout, register};
use ipgeo::egui_app::Config;
use ipgeo::shared::config::AppConfig;

fn config_for(server: &mockito::ServerGuard, token: Option<&str>) -> Config {
    let mut config =
        Config::with_builder(AppConfig::builder().api_base_url(format!("{}/", server.url())))
            .unwrap();
    config.set_token(token.map(str::to_string));
    config
}

#[test]
fn test_register_posts_the_form_unauthenticated() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/auth/register")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "hunter2"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"42"}"#)
        .create();

    let config = config_for(&server, None);
    let body = register(
        &config,
        "Ada".to_string(),
        "ada@example.com".to_string(),
        "hunter2".to_string(),
    )
    .unwrap();

    assert_eq!(body, r#"{"id":"42"}"#);
    mock.assert();
}

#[test]
fn test_register_failure_is_an_error() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/auth/register")
        .with_status(409)
        .with_body("email taken")
        .create();

    let config = config_for(&server, None);
    let err = register(
        &config,
        "Ada".to_string(),
        "ada@example.com".to_string(),
        "hunter2".to_string(),
    )
    .unwrap_err();

    assert!(err.contains("Registration failed"), "unexpected error: {}", err);
}

#[test]
fn test_logout_sends_bearer_token() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/auth/logout")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .create();

    let config = config_for(&server, Some("test-token"));
    logout(&config).unwrap();

    mock.assert();
}

#[test]
fn test_logout_without_session_fails_before_the_network() {
    let server = mockito::Server::new();

    let config = config_for(&server, None);
    let err = logout(&config).unwrap_err();

    assert_eq!(err, "Not authenticated");
}

#[test]
fn test_logout_rejection_is_an_error() {
    let mut server = mockito::Server::new();
    server.mock("POST", "/auth/logout").with_status(401).create();

    let config = config_for(&server, Some("stale-token"));
    let err = logout(&config).unwrap_err();

    assert!(err.contains("Logout failed"), "unexpected error: {}", err);
}
