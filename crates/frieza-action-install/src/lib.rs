//! Release resolution and binary installation for the frieza CLI
//!
//! Provides:
//! - Release lookup against the GitHub release index (latest or explicit)
//! - Platform/architecture mapping to the release packaging convention
//! - Deterministic asset name construction and exact-match lookup
//! - Archive download and extraction
//! - Binary normalization to a version-agnostic canonical name
//!
//! The pipeline is strictly sequential and attempt-once: any failure aborts
//! the run.

pub mod download;
pub mod installer;
pub mod platform;
pub mod releases;

pub use download::{ArchiveFetcher, FetchedArchive};
pub use installer::{normalize_binary, InstalledBinary, ToolInstaller};
pub use platform::PlatformTarget;
pub use releases::{
    find_asset, find_asset_url, numeric_version, Release, ReleaseAsset, ReleaseResolver,
};

/// Name of the tool installed by this crate
pub const TOOL_NAME: &str = "frieza";

/// Archive extension used by frieza release assets
pub const ARCHIVE_EXT: &str = "zip";
