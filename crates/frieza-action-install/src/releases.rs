//! GitHub release lookup

use frieza_action_core::config::RuntimeConfig;
use frieza_action_core::{Error, GitHubConfig, Result};
use serde::Deserialize;
use tracing::debug;

/// Release information
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Release tag (e.g., "v1.2.0")
    pub tag_name: String,

    /// Release name
    pub name: Option<String>,

    /// Whether this is a prerelease
    #[serde(default)]
    pub prerelease: bool,

    /// Whether this is a draft
    #[serde(default)]
    pub draft: bool,

    /// Release assets
    pub assets: Vec<ReleaseAsset>,

    /// Published date
    pub published_at: Option<String>,
}

/// Release asset
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    /// Asset name
    pub name: String,

    /// Download URL
    pub browser_download_url: String,

    /// Asset size in bytes
    #[serde(default)]
    pub size: u64,
}

/// Resolver turning a release specifier into a concrete release record
pub struct ReleaseResolver {
    /// GitHub API client
    client: reqwest::Client,

    /// Release index location
    github: GitHubConfig,
}

impl ReleaseResolver {
    /// Create a new resolver
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.network.user_agent)
            .timeout(std::time::Duration::from_secs(
                config.network.http_timeout_secs,
            ))
            .build()
            .map_err(|e| Error::resolution(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            github: config.github.clone(),
        })
    }

    /// Resolve a release specifier to a release record
    ///
    /// An empty specifier selects the most recent published release; anything
    /// else is passed verbatim as a release identifier. Single attempt, no
    /// retry.
    pub async fn resolve(&self, specifier: &str) -> Result<Release> {
        let url = if specifier.is_empty() {
            format!(
                "{}/repos/{}/{}/releases/latest",
                self.github.api_url, self.github.repo_owner, self.github.repo_name
            )
        } else {
            format!(
                "{}/repos/{}/{}/releases/{}",
                self.github.api_url, self.github.repo_owner, self.github.repo_name, specifier
            )
        };

        debug!("Fetching release from: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::resolution(format!("request to {url} failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::resolution(format!(
                "{} returned HTTP {}",
                url,
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::resolution(format!("failed to parse release record: {e}")))
    }
}

/// Strip a single leading version prefix from a release tag
///
/// Asset names embed the numeric version; the tag itself keeps the prefix.
pub fn numeric_version(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}

/// Find the asset named exactly `name`
///
/// First match wins; duplicate names are not validated against.
pub fn find_asset<'a>(assets: &'a [ReleaseAsset], name: &str) -> Option<&'a ReleaseAsset> {
    assets.iter().find(|a| a.name == name)
}

/// Find the download URL of the asset named exactly `name`
///
/// `None` is the not-found signal; callers must fail loudly on it instead of
/// attempting a download.
pub fn find_asset_url<'a>(assets: &'a [ReleaseAsset], name: &str) -> Option<&'a str> {
    find_asset(assets, name).map(|a| a.browser_download_url.as_str())
}
