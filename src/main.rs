use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod core;
mod error;

use crate::cli::Cli;
use crate::core::Engine;

fn main() -> Result<()> {
    // A bad invocation exits 1, not clap's default 2; help and version
    // keep exit 0.
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let is_benign = matches!(
            err.kind(),
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
        );
        let _ = err.print();
        std::process::exit(if is_benign { 0 } else { 1 });
    });

    // Initialize logging on stderr; stdout carries the report
    let default_directive = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .init();

    info!("Starting paradiff v{}", env!("CARGO_PKG_VERSION"));

    let engine = Engine::new(cli.config());

    cli.execute(engine)
}
