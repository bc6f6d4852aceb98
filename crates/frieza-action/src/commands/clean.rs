//! Post step: delete everything created since the snapshot

use anyhow::Result;
use tracing::info;

use crate::cli::CleanArgs;
use crate::frieza::FriezaCli;

pub async fn run(_args: CleanArgs) -> Result<()> {
    let tool = FriezaCli::from_path();

    info!("Cleaning account back to snapshot");
    tool.clean_account().await?;

    Ok(())
}
