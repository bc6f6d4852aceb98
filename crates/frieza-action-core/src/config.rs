//! Runtime configuration for the action
//!
//! Everything here has a sensible default; the only external override is the
//! standard Actions runner variable `GITHUB_API_URL`, which redirects the
//! release index (GHES deployments, tests).

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Runtime configuration assembled once per run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Network and HTTP configuration
    #[serde(default)]
    pub network: NetworkConfig,

    /// GitHub repository settings for the frieza release index
    #[serde(default)]
    pub github: GitHubConfig,
}

impl RuntimeConfig {
    /// Build the configuration from defaults plus runner environment overrides
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(api_url) = std::env::var("GITHUB_API_URL") {
            if !api_url.is_empty() {
                debug!("Using release index from GITHUB_API_URL: {}", api_url);
                config.github.api_url = api_url;
            }
        }

        config
    }
}

/// Network and HTTP configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Timeout for release index requests, in seconds
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,

    /// Timeout for asset downloads, in seconds
    #[serde(default = "default_download_timeout")]
    pub download_timeout_secs: u64,

    /// User agent string for HTTP requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            http_timeout_secs: default_http_timeout(),
            download_timeout_secs: default_download_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// GitHub repository settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// Repository owner
    #[serde(default = "default_repo_owner")]
    pub repo_owner: String,

    /// Repository name
    #[serde(default = "default_repo_name")]
    pub repo_name: String,

    /// Base URL for the GitHub API
    #[serde(default = "default_github_api_url")]
    pub api_url: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            repo_owner: default_repo_owner(),
            repo_name: default_repo_name(),
            api_url: default_github_api_url(),
        }
    }
}

fn default_http_timeout() -> u64 {
    30
}

fn default_download_timeout() -> u64 {
    300
}

fn default_user_agent() -> String {
    format!("frieza-action/{}", env!("CARGO_PKG_VERSION"))
}

fn default_repo_owner() -> String {
    "outscale-dev".to_string()
}

fn default_repo_name() -> String {
    "frieza".to_string()
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}
