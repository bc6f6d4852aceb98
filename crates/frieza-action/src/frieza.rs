//! Invocation wrappers for the installed frieza CLI
//!
//! Argument vectors are fixed; frieza's own output streams straight into the
//! job log.

use frieza_action_core::{Error, Result};
use std::ffi::OsString;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

/// Profile name registered by the action
pub const PROFILE_NAME: &str = "action";

/// Snapshot name created and cleaned by the action
pub const SNAPSHOT_NAME: &str = "snapshot-action";

/// Provider identifier passed to `frieza profile new`
pub const PROVIDER: &str = "outscale_oapi";

/// Cloud credentials registered with frieza
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Cloud credential identifier
    pub access_key: String,

    /// Cloud credential secret
    pub secret_key: String,

    /// Cloud region
    pub region: String,
}

/// Wrapper around one frieza executable
pub struct FriezaCli {
    /// Program invoked for every operation
    program: OsString,

    /// Profile registered and used by this run
    profile_name: String,

    /// Snapshot created and cleaned by this run
    snapshot_name: String,
}

impl FriezaCli {
    /// Wrap the executable at `program`
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().as_os_str().to_os_string(),
            profile_name: PROFILE_NAME.to_string(),
            snapshot_name: SNAPSHOT_NAME.to_string(),
        }
    }

    /// Wrap whatever `frieza` resolves to on PATH
    ///
    /// The post step runs in a fresh process; the main step exported the
    /// install directory through GITHUB_PATH.
    pub fn from_path() -> Self {
        Self::new("frieza")
    }

    /// Override the profile name
    pub fn with_profile_name(mut self, name: impl Into<String>) -> Self {
        self.profile_name = name.into();
        self
    }

    /// Override the snapshot name
    pub fn with_snapshot_name(mut self, name: impl Into<String>) -> Self {
        self.snapshot_name = name.into();
        self
    }

    /// Register cloud credentials under the action profile
    pub async fn create_profile(&self, credentials: &Credentials) -> Result<()> {
        self.exec(vec![
            "profile".to_string(),
            "new".to_string(),
            PROVIDER.to_string(),
            format!("--region={}", credentials.region),
            format!("--ak={}", credentials.access_key),
            format!("--sk={}", credentials.secret_key),
            self.profile_name.clone(),
        ])
        .await
    }

    /// Snapshot every resource currently in the account
    pub async fn create_snapshot(&self) -> Result<()> {
        self.exec(vec![
            "snapshot".to_string(),
            "new".to_string(),
            self.snapshot_name.clone(),
            self.profile_name.clone(),
        ])
        .await
    }

    /// Delete everything created since the snapshot
    pub async fn clean_account(&self) -> Result<()> {
        self.exec(vec![
            "clean".to_string(),
            "--auto-approve".to_string(),
            self.snapshot_name.clone(),
        ])
        .await
    }

    /// Run frieza with `args`, failing on non-zero exit
    async fn exec(&self, args: Vec<String>) -> Result<()> {
        // Label with the subcommand only; later arguments carry credentials.
        let label = format!(
            "{} {}",
            self.program.to_string_lossy(),
            args.iter()
                .take(2)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" ")
        );

        debug!("Running {}", label);

        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .await
            .map_err(|e| Error::execution(&label, format!("failed to start: {e}")))?;

        if !status.success() {
            return Err(Error::execution(&label, format!("exited with {status}")));
        }

        Ok(())
    }
}
