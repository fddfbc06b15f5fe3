//! Binary crate for the `cityweather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Rendering presented items as text cards or a scrollable terminal screen

use clap::Parser;

mod cli;
mod render;
mod tui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cmd = cli::Cli::parse();
    cmd.run().await.inspect_err(|e| log::error!("{e:#}"))
}
