//! bodycalc - body measurement classifier CLI
//!
//! Reads subject records, classifies them with the `bodycalc` library and
//! renders the labels for a tag store to apply.

mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // The config can set the log level, so it is loaded before the global
    // subscriber exists; its own warnings go through a temporary one.
    let bootstrap = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(cli.log_level.as_deref()))
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, || cli::load_config(&cli))?;

    // RUST_LOG > --log-level > [defaults].log_level > info
    let level = cli
        .log_level
        .as_deref()
        .or(config.defaults.log_level.as_deref());
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter(level))
        .init();

    cli::run(cli, config)
}

fn env_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.unwrap_or("info")))
}
