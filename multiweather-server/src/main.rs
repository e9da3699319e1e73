//! Binary crate for the `multiweather` HTTP service.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Wiring configuration into provider instances
//! - Serving the aggregation endpoint

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
