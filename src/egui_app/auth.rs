//! Authentication API Client
//!
//! HTTP client functions for account registration and logout. There is no
//! login call: the login endpoint was never wired up, and sessions are
//! established from a bearer token obtained out-of-band.

use reqwest::Client;
use tokio::runtime::Runtime;

use crate::egui_app::config::Config;
use crate::egui_app::types::RegisterRequest;

/// Register a new account with name, email, and password.
///
/// Returns the raw response body; the caller only logs it.
pub fn register(
    config: &Config,
    name: String,
    email: String,
    password: String,
) -> Result<String, String> {
    let client = Client::new();
    let url = config.api_url("auth/register");

    let request = RegisterRequest {
        name,
        email,
        password,
    };

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(format!("Registration failed: {} - {}", status, error_text));
        }

        response
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {}", e))
    })
}

/// End the server-side session. Any non-2xx status is an error; the
/// caller clears the local token only on success.
pub fn logout(config: &Config) -> Result<(), String> {
    let client = Client::new();
    let url = config.api_url("auth/logout");
    let token = config.get_token().ok_or("Not authenticated")?;

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(format!("Logout failed: {} - {}", status, error_text));
        }

        Ok(())
    })
}
