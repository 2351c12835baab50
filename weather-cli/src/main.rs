//! Binary crate for the `shipping-weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive prompt loop
//! - Human-friendly table output

use clap::Parser;
use colored::Colorize;

mod cli;
mod command;
mod session;
mod table;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cli::init_tracing(cmd.verbose);

    if let Err(err) = cmd.run().await {
        tracing::error!(error = ?err, "exiting after unhandled error");
        eprintln!("{}", format!("An error occurred: {err:#}").bold().red());
    }

    Ok(())
}
