use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing_subscriber::{registry::Registry, prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

use upgrade_rules::cli::CLI;

fn main() -> Result<ExitCode> {
    let subscriber = Registry::default()
        .with(EnvFilter::from_default_env())
        .with(HierarchicalLayer::new(2));
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    let cli = CLI::init()?;
    cli.run()
}
