//! Binary crate for the `solar` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive location picking and configuration
//! - Human-friendly table output

use clap::Parser;

mod cli;
mod output;
mod prompt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
