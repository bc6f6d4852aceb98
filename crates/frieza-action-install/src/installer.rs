//! Binary installation pipeline
//!
//! Runs the whole sequence: resolve release, map the host platform, build
//! the asset name, look it up, fetch and extract the archive, and normalize
//! the executable to its canonical name.

use frieza_action_core::config::RuntimeConfig;
use frieza_action_core::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::download::ArchiveFetcher;
use crate::platform::PlatformTarget;
use crate::releases::{find_asset, numeric_version, ReleaseResolver};
use crate::TOOL_NAME;

/// Canonical executable installed by a run
///
/// The install directory has no explicit teardown; the ephemeral runner
/// discards it after the job.
#[derive(Debug)]
pub struct InstalledBinary {
    /// Path of the canonical executable
    pub bin_path: PathBuf,

    /// Directory containing the executable
    pub install_dir: PathBuf,

    /// Tag of the release the binary came from
    pub tag: String,
}

/// Installer running the resolve → fetch → normalize pipeline
pub struct ToolInstaller {
    /// Release index resolver
    resolver: ReleaseResolver,

    /// Archive downloader
    fetcher: ArchiveFetcher,

    /// Platform target, detected once per run
    target: PlatformTarget,
}

impl ToolInstaller {
    /// Create a new installer for the current host platform
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        Ok(Self {
            resolver: ReleaseResolver::new(config)?,
            fetcher: ArchiveFetcher::new(config)?,
            target: PlatformTarget::detect(),
        })
    }

    /// Override the detected platform target
    pub fn with_target(mut self, target: PlatformTarget) -> Self {
        self.target = target;
        self
    }

    /// Install the release selected by `specifier` (empty = latest)
    pub async fn install(&self, specifier: &str) -> Result<InstalledBinary> {
        let release = self.resolver.resolve(specifier).await?;
        let version = numeric_version(&release.tag_name);
        let asset_name = self.target.asset_name(TOOL_NAME, version);

        debug!(
            "Looking for asset {} in release {}",
            asset_name, release.tag_name
        );

        let asset = find_asset(&release.assets, &asset_name)
            .ok_or_else(|| Error::asset_not_found(&asset_name, &release.tag_name))?;

        info!("Downloading {}", asset.name);

        let expected_size = Some(asset.size).filter(|s| *s > 0);
        let fetched = self
            .fetcher
            .fetch_and_extract(&asset.browser_download_url, expected_size)
            .await?;

        debug!("Archive sha256: {}", fetched.checksum);

        let bin_path = normalize_binary(&fetched.dir, &release.tag_name, &self.target)?;

        info!(
            "Installed {} {} at {}",
            TOOL_NAME,
            release.tag_name,
            bin_path.display()
        );

        Ok(InstalledBinary {
            bin_path,
            install_dir: fetched.dir,
            tag: release.tag_name,
        })
    }
}

/// Rename the version-tagged executable in `dir` to its canonical name
///
/// The archive ships the executable as `{tool}_{tag}{suffix}`; every later
/// invocation expects plain `{tool}{suffix}`. Either the canonical file
/// exists afterwards or an error is returned and nothing was moved.
pub fn normalize_binary(dir: &Path, tag: &str, target: &PlatformTarget) -> Result<PathBuf> {
    let suffix = target.exe_suffix();
    let source = dir.join(format!("{}_{}{}", TOOL_NAME, tag, suffix));
    let dest = dir.join(format!("{}{}", TOOL_NAME, suffix));

    debug!("Moving {} to {}", source.display(), dest.display());

    if !source.exists() {
        return Err(Error::normalization(
            &source,
            &dest,
            "source file does not exist",
        ));
    }

    fs::rename(&source, &dest).map_err(|e| Error::normalization(&source, &dest, e.to_string()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&dest)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&dest, perms)?;
    }

    Ok(dest)
}
