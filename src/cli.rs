//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use obce::output::OutputConfig;

use crate::commands;

/// Build static JSON reference files of Czech municipalities and towns
#[derive(Parser, Debug)]
#[command(name = "obce")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch all Czech municipalities from the Overpass API
    FetchMunicipalities(commands::fetch_municipalities::FetchMunicipalitiesArgs),

    /// Fetch Czech city and town place nodes from the Overpass API
    FetchTowns(commands::fetch_towns::FetchTownsArgs),

    /// Convert a local coordinate CSV export to the municipality JSON
    Convert(commands::convert::ConvertArgs),

    /// Merge the canonical town list against municipality data
    MergeTowns(commands::merge_towns::MergeTownsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let level = match self.log_level.parse::<log::LevelFilter>() {
            Ok(level) => level,
            Err(_) => {
                // The logger is not up yet, so this goes to stderr directly
                eprintln!(
                    "Unknown log level '{}', using 'info' (valid: error, warn, info, debug, trace)",
                    self.log_level
                );
                log::LevelFilter::Info
            }
        };
        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .init();

        let output = OutputConfig::from_flag(&self.color);

        match self.command {
            Commands::FetchMunicipalities(args) => {
                commands::fetch_municipalities::execute(args, &output)
            }
            Commands::FetchTowns(args) => commands::fetch_towns::execute(args, &output),
            Commands::Convert(args) => commands::convert::execute(args, &output),
            Commands::MergeTowns(args) => commands::merge_towns::execute(args, &output),
        }
    }
}
