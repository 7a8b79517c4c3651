//! Binary crate for the `thoitiet` command-line dashboard.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Vietnamese-locale terminal rendering

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
