//! Binary crate for the `weather-alerts` tool.
//!
//! This crate focuses on:
//! - Serving the `get_alerts` MCP tool over stdio
//! - Parsing CLI arguments and interactive configuration
//! - Logging setup

use clap::Parser;

mod cli;
mod logging;
mod server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    logging::init(cmd.verbose)?;
    cmd.run().await
}
