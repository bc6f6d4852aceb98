//! Main action step: install frieza, register credentials, snapshot

use anyhow::{Context, Result};
use frieza_action_core::config::RuntimeConfig;
use frieza_action_install::ToolInstaller;
use tracing::info;

use crate::actions;
use crate::cli::RunArgs;
use crate::frieza::{Credentials, FriezaCli};

pub async fn run(args: RunArgs) -> Result<()> {
    let config = RuntimeConfig::from_env();

    let installer = ToolInstaller::new(&config)?;
    let installed = installer.install(&args.release).await?;

    // Make frieza visible to later steps of the same job (the post step
    // resolves it from PATH).
    actions::add_path(&installed.install_dir)
        .context("Failed to export install directory to GITHUB_PATH")?;

    let tool = FriezaCli::new(&installed.bin_path);

    let credentials = Credentials {
        access_key: args.access_key,
        secret_key: args.secret_key,
        region: args.region,
    };

    info!("Registering credentials");
    tool.create_profile(&credentials).await?;

    info!("Creating snapshot");
    tool.create_snapshot().await?;

    Ok(())
}
