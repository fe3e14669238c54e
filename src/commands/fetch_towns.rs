//! # Fetch-Towns Command
//!
//! Fetches Czech city and town place nodes from the Overpass API via
//! the mirror list, sorts them by name and writes the combined list as
//! pretty JSON. The summary splits the counts by place class and lists
//! the first 15 cities in name order with their population tag,
//! mirroring what an operator wants to eyeball after a refresh.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;

use obce::defaults;
use obce::output::{marker, OutputConfig};
use obce::source::{overpass, HttpTransport};
use obce::writer;

/// Fetch Czech city and town place nodes from the Overpass API
#[derive(Args, Debug)]
pub struct FetchTownsArgs {
    /// Output file for the town JSON.
    #[arg(short, long, value_name = "FILE", default_value = defaults::TOWNS_JSON)]
    pub output: PathBuf,

    /// Timeout per source attempt, in seconds.
    #[arg(long, value_name = "SECONDS", default_value_t = 120)]
    pub timeout: u64,
}

/// Execute the `fetch-towns` command.
pub fn execute(args: FetchTownsArgs, out: &OutputConfig) -> Result<()> {
    let transport = HttpTransport::new(Duration::from_secs(args.timeout))?;

    println!("Fetching city/town place nodes from Overpass...");
    let loaded = overpass::fetch_towns(&transport, &defaults::OVERPASS_MIRRORS)?;

    if loaded.skipped > 0 {
        println!("Skipped {} nodes with missing fields", loaded.skipped);
    }

    let mut records = loaded.records;
    writer::sort_by_name(&mut records);
    writer::write_json(&records, &args.output)?;

    let cities = records.iter().filter(|t| t.place_type == "city").count();
    let towns = records.len() - cities;

    println!(
        "\n{} Saved {} places to {}",
        marker(out, "✓", "[OK]"),
        records.len(),
        args.output.display()
    );
    println!("  - city (large cities): {cities}");
    println!("  - town (smaller towns): {towns}");

    println!("\nLarge cities (city):");
    for record in records.iter().filter(|t| t.place_type == "city").take(15) {
        if record.population.is_empty() {
            println!("  - {}", record.name);
        } else {
            println!("  - {} ({} inhabitants)", record.name, record.population);
        }
    }

    Ok(())
}
