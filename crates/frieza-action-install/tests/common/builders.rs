//! Builder patterns for test data construction
//!
//! Builds release payloads as JSON (what the release index actually serves)
//! with sensible defaults; `build()` deserializes the same payload into a
//! `Release` for tests that skip the resolver.

use frieza_action_install::releases::Release;
use serde_json::{json, Value};

use super::constants::*;

/// Builder for release JSON payloads
#[derive(Debug, Clone)]
pub struct ReleaseBuilder {
    tag_name: String,
    name: Option<String>,
    prerelease: bool,
    draft: bool,
    assets: Vec<Value>,
    published_at: Option<String>,
}

impl ReleaseBuilder {
    /// Create a new ReleaseBuilder with minimal defaults
    pub fn new() -> Self {
        Self {
            tag_name: TAG_V3_0_0.to_string(),
            name: None,
            prerelease: false,
            draft: false,
            assets: Vec::new(),
            published_at: None,
        }
    }

    /// Set the tag name
    pub fn tag(mut self, tag: &str) -> Self {
        self.tag_name = tag.to_string();
        self
    }

    /// Set the release name
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Mark as prerelease
    pub fn prerelease(mut self) -> Self {
        self.prerelease = true;
        self
    }

    /// Set the published date
    pub fn published_at(mut self, date: &str) -> Self {
        self.published_at = Some(date.to_string());
        self
    }

    /// Add a single asset
    pub fn asset(mut self, asset: Value) -> Self {
        self.assets.push(asset);
        self
    }

    /// Build the release index JSON payload
    pub fn build_json(self) -> Value {
        json!({
            "tag_name": self.tag_name,
            "name": self.name,
            "prerelease": self.prerelease,
            "draft": self.draft,
            "assets": self.assets,
            "published_at": self.published_at,
        })
    }

    /// Build a `Release` the way the resolver would
    pub fn build(self) -> Release {
        serde_json::from_value(self.build_json()).expect("release payload should deserialize")
    }
}

impl Default for ReleaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for release asset JSON records
#[derive(Debug, Clone)]
pub struct ReleaseAssetBuilder {
    name: String,
    browser_download_url: String,
    size: u64,
}

impl ReleaseAssetBuilder {
    /// Create a new asset builder with minimal defaults
    pub fn new() -> Self {
        Self {
            name: String::new(),
            browser_download_url: String::new(),
            size: 1024,
        }
    }

    /// Set the asset name from version/os/arch in the frieza naming scheme
    pub fn platform(mut self, version: &str, os: &str, arch: &str) -> Self {
        self.name = format!("frieza_{version}_{os}_{arch}.zip");
        self
    }

    /// Set a custom name
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Set the download URL
    pub fn url(mut self, url: &str) -> Self {
        self.browser_download_url = url.to_string();
        self
    }

    /// Set the URL from a mock server base URL and path
    pub fn mock_url(mut self, server_uri: &str, path: &str) -> Self {
        self.browser_download_url = format!("{server_uri}{path}");
        self
    }

    /// Set the asset size
    pub fn size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Set size from content bytes
    pub fn size_from_content(mut self, content: &[u8]) -> Self {
        self.size = content.len() as u64;
        self
    }

    /// Build the asset JSON record
    pub fn build_json(self) -> Value {
        json!({
            "name": self.name,
            "browser_download_url": self.browser_download_url,
            "size": self.size,
        })
    }
}

impl Default for ReleaseAssetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
