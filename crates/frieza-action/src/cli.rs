//! CLI argument parsing with clap
//!
//! Action inputs arrive as `INPUT_<NAME>` environment variables set by the
//! Actions runner; every argument can also be passed explicitly for local
//! runs.

use clap::{Args, Parser, Subcommand};

/// GitHub Action wrapping the frieza cloud-cleanup CLI
#[derive(Parser, Debug)]
#[command(name = "frieza-action")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install frieza, register credentials and snapshot the account
    Run(RunArgs),

    /// Delete every resource created since the snapshot (post step)
    Clean(CleanArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Cloud credential identifier
    #[arg(long, env = "INPUT_ACCESS_KEY", hide_env_values = true)]
    pub access_key: String,

    /// Cloud credential secret
    #[arg(long, env = "INPUT_SECRET_KEY", hide_env_values = true)]
    pub secret_key: String,

    /// Cloud region
    #[arg(long, env = "INPUT_REGION")]
    pub region: String,

    /// Release to install (empty = latest)
    #[arg(long, env = "INPUT_RELEASE", default_value = "")]
    pub release: String,
}

#[derive(Args, Debug)]
pub struct CleanArgs {}
