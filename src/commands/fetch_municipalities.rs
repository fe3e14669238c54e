//! # Fetch-Municipalities Command
//!
//! Fetches the complete list of Czech municipalities (administrative
//! boundaries at admin_level 8) from the Overpass API, trying each
//! configured mirror in order. When every mirror fails, falls back to
//! the czech-cities CSV export on GitHub before giving up. The result
//! is sorted by name and written as pretty JSON, overwriting any
//! previous output.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;

use obce::defaults;
use obce::output::{marker, OutputConfig};
use obce::source::{self, HttpTransport};
use obce::writer;

/// Fetch all Czech municipalities from the Overpass API
#[derive(Args, Debug)]
pub struct FetchMunicipalitiesArgs {
    /// Output file for the municipality JSON.
    #[arg(short, long, value_name = "FILE", default_value = defaults::MUNICIPALITIES_JSON)]
    pub output: PathBuf,

    /// Timeout per source attempt, in seconds.
    #[arg(long, value_name = "SECONDS", default_value_t = 300)]
    pub timeout: u64,
}

/// Execute the `fetch-municipalities` command.
pub fn execute(args: FetchMunicipalitiesArgs, out: &OutputConfig) -> Result<()> {
    let transport = HttpTransport::new(Duration::from_secs(args.timeout))?;

    println!("Fetching municipalities (admin_level=8) from Overpass, this can take 1-2 minutes...");
    let loaded = source::load_municipalities(
        &transport,
        &defaults::OVERPASS_MIRRORS,
        defaults::GITHUB_CSV_URL,
    )?;

    if loaded.skipped > 0 {
        println!("Skipped {} records with missing fields", loaded.skipped);
    }

    let mut records = loaded.records;
    writer::sort_by_name(&mut records);
    writer::write_json(&records, &args.output)?;

    println!(
        "\n{} Saved {} municipalities to {}",
        marker(out, "✓", "[OK]"),
        records.len(),
        args.output.display()
    );

    println!("\nFirst 10 records:");
    for record in records.iter().take(10) {
        println!("  - {}: {:.6}, {:.6}", record.name, record.lat, record.lon);
    }

    Ok(())
}
