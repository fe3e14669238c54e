//! # obce CLI
//!
//! Binary entry point for the `obce` command-line tool.
//!
//! Its responsibilities are parsing command-line arguments with `clap`,
//! dispatching to the appropriate subcommand, and translating top-level
//! errors into user-facing output. The actual dataset logic lives in
//! the `obce` library crate.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
