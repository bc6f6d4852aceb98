//! Archive download and extraction
//!
//! Downloads a release archive to a staging directory, verifies its size
//! against the release record, and unpacks it into a directory that outlives
//! this process (later workflow steps invoke the installed binary). The
//! staging directory is cleaned up on drop; the extraction directory is left
//! to the ephemeral runner.

use frieza_action_core::config::RuntimeConfig;
use frieza_action_core::{Error, Result};
use futures_util::StreamExt;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

/// Result of a fetch-and-extract operation
#[derive(Debug)]
pub struct FetchedArchive {
    /// Directory holding the extracted archive contents
    pub dir: PathBuf,

    /// Path of the downloaded archive file
    pub archive_path: PathBuf,

    /// Size of the downloaded archive in bytes
    pub size: u64,

    /// SHA256 checksum of the downloaded archive
    pub checksum: String,
}

/// Downloader for release archives
pub struct ArchiveFetcher {
    /// HTTP client
    client: reqwest::Client,

    /// Staging directory for in-flight downloads
    staging: TempDir,
}

impl ArchiveFetcher {
    /// Create a new fetcher
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        let staging = TempDir::new()?;

        let client = reqwest::Client::builder()
            .user_agent(&config.network.user_agent)
            .timeout(std::time::Duration::from_secs(
                config.network.download_timeout_secs,
            ))
            .build()
            .map_err(|e| Error::fetch(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, staging })
    }

    /// Staging directory path
    pub fn staging_dir(&self) -> &Path {
        self.staging.path()
    }

    /// Download the archive at `url` and unpack it
    ///
    /// `expected_size` is checked against the downloaded byte count when the
    /// release record carries one. Single attempt, no retry.
    pub async fn fetch_and_extract(
        &self,
        url: &str,
        expected_size: Option<u64>,
    ) -> Result<FetchedArchive> {
        if url.is_empty() {
            return Err(Error::fetch("could not resolve asset: empty download URL"));
        }

        let (archive_path, size, checksum) = self.download(url).await?;

        if let Some(expected) = expected_size {
            if size != expected {
                return Err(Error::fetch(format!(
                    "size mismatch for {url}: expected {expected} bytes, got {size}"
                )));
            }
        }

        let dir = self.extract(&archive_path)?;

        Ok(FetchedArchive {
            dir,
            archive_path,
            size,
            checksum,
        })
    }

    /// Stream the body at `url` into the staging directory
    async fn download(&self, url: &str) -> Result<(PathBuf, u64, String)> {
        debug!("Downloading {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::fetch(format!("request to {url} failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::fetch(format!(
                "{} returned HTTP {}",
                url,
                response.status()
            )));
        }

        let file_name = url
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or("download.zip");
        let path = self.staging.path().join(file_name);

        let mut file = File::create(&path)?;
        let mut hasher = Sha256::new();
        let mut size: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk_result) = stream.next().await {
            let chunk: bytes::Bytes = chunk_result
                .map_err(|e| Error::fetch(format!("failed to read download chunk: {e}")))?;
            hasher.update(&chunk);
            file.write_all(&chunk)?;
            size += chunk.len() as u64;
        }

        let checksum = format!("{:x}", hasher.finalize());

        debug!("Downloaded {} bytes, sha256 {}", size, checksum);

        Ok((path, size, checksum))
    }

    /// Unpack the archive into a directory that survives this process
    fn extract(&self, archive_path: &Path) -> Result<PathBuf> {
        debug!("Extracting {}", archive_path.display());

        let file = File::open(archive_path)?;
        let mut archive = zip::ZipArchive::new(file).map_err(|e| {
            Error::fetch(format!(
                "failed to open archive {}: {e}",
                archive_path.display()
            ))
        })?;

        let dest = install_dir()?;
        archive.extract(&dest).map_err(|e| {
            Error::fetch(format!(
                "failed to extract {}: {e}",
                archive_path.display()
            ))
        })?;

        Ok(dest)
    }
}

/// Create the extraction directory
///
/// Lives under the runner's job-scoped temp directory when available, so the
/// installed binary stays usable from the post step of the same job.
fn install_dir() -> Result<PathBuf> {
    let base = std::env::var_os("RUNNER_TEMP")
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);
    fs::create_dir_all(&base)?;

    let dir = tempfile::Builder::new()
        .prefix("frieza-install-")
        .tempdir_in(base)?;

    Ok(dir.keep())
}
