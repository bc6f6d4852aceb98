//! GitHub Actions runner surface
//!
//! The runner communicates through files named by environment variables
//! (`GITHUB_PATH`) and through workflow commands printed on stdout.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Append `dir` to the PATH of subsequent workflow steps
///
/// No-op outside a runner (when `GITHUB_PATH` is unset).
pub fn add_path(dir: &Path) -> std::io::Result<()> {
    let Some(path_file) = std::env::var_os("GITHUB_PATH") else {
        debug!("GITHUB_PATH not set, skipping PATH export");
        return Ok(());
    };

    debug!("Adding {} to GITHUB_PATH", dir.display());

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path_file)?;
    writeln!(file, "{}", dir.display())?;

    Ok(())
}

/// Mark the run failed with an error annotation
pub fn set_failed(message: &str) {
    println!("::error::{}", escape_data(message));
}

/// Escape a workflow command payload
///
/// Order matters: '%' first, or the escapes themselves get re-escaped.
fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
