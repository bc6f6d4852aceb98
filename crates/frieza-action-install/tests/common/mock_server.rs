//! Mock server helpers for release index and download testing
//!
//! Sets up wiremock endpoints shaped like the GitHub release API for the
//! `outscale-dev/frieza` repository.

use frieza_action_core::config::RuntimeConfig;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Runtime configuration pointing the release index at a mock server
pub fn config_for(server: &MockServer) -> RuntimeConfig {
    let mut config = RuntimeConfig::default();
    config.github.api_url = server.uri();
    config
}

/// Mock the "latest release" endpoint
pub async fn mock_latest_release(server: &MockServer, body: &Value) {
    Mock::given(method("GET"))
        .and(path("/repos/outscale-dev/frieza/releases/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mock the "release by identifier" endpoint
pub async fn mock_release(server: &MockServer, specifier: &str, body: &Value) {
    Mock::given(method("GET"))
        .and(path(format!(
            "/repos/outscale-dev/frieza/releases/{specifier}"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mock a release lookup that fails with the given status
pub async fn mock_release_error(server: &MockServer, specifier: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!(
            "/repos/outscale-dev/frieza/releases/{specifier}"
        )))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Mock an asset download endpoint serving raw bytes
pub async fn mock_asset_download(server: &MockServer, asset_path: &str, content: &[u8]) {
    Mock::given(method("GET"))
        .and(path(asset_path))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content))
        .mount(server)
        .await;
}

/// Mock an asset download endpoint that must never be hit
///
/// The expectation is checked when the mock server shuts down.
pub async fn mock_forbidden_download(server: &MockServer, asset_path: &str) {
    Mock::given(method("GET"))
        .and(path(asset_path))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}

/// Mock an asset download that always fails with 500
pub async fn mock_failing_download(server: &MockServer, asset_path: &str) {
    Mock::given(method("GET"))
        .and(path(asset_path))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}
