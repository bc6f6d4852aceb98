//! frieza-action - GitHub Action wrapping the frieza cloud-cleanup CLI
//!
//! This is the entry point for both action steps: `run` installs frieza,
//! registers credentials and snapshots the account; `clean` is the post
//! step, deleting everything created since the snapshot.

mod actions;
mod cli;
mod commands;
mod frieza;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    // Initialize rustls crypto provider (required for rustls 0.23+)
    // This must be done before any TLS operations
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args).await,
        Commands::Clean(args) => commands::clean::run(args).await,
    };

    if let Err(error) = result {
        // The runner turns the annotation into a run-level failure.
        actions::set_failed(&format!("{error:#}"));
        std::process::exit(1);
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
