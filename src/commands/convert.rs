//! # Convert Command
//!
//! Converts the local coordinate CSV export (fixed Czech column header
//! contract) into the municipality JSON file. Rows with unparsable
//! coordinates are skipped and counted; a missing required column
//! aborts the run naming the column. Prints per-region counts so an
//! operator can sanity-check the distribution against the previous run.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use obce::defaults;
use obce::output::{marker, OutputConfig};
use obce::source::csvfile;
use obce::writer;

/// Convert a local coordinate CSV export to the municipality JSON
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input CSV file with the coordinate export.
    #[arg(short, long, value_name = "FILE", default_value = defaults::RAW_CSV)]
    pub input: PathBuf,

    /// Output file for the municipality JSON.
    #[arg(short, long, value_name = "FILE", default_value = defaults::MUNICIPALITIES_JSON)]
    pub output: PathBuf,
}

/// Execute the `convert` command.
pub fn execute(args: ConvertArgs, out: &OutputConfig) -> Result<()> {
    println!("Converting {} ...", args.input.display());
    let loaded = csvfile::read_csv_file(&args.input)?;

    if loaded.skipped > 0 {
        println!("Skipped {} rows with missing fields", loaded.skipped);
    }

    let mut records = loaded.records;
    writer::sort_by_name(&mut records);
    writer::write_json(&records, &args.output)?;

    println!(
        "{} Converted {} municipalities",
        marker(out, "✓", "[OK]"),
        records.len()
    );
    println!(
        "{} Saved to {}",
        marker(out, "✓", "[OK]"),
        args.output.display()
    );

    // Per-region distribution, largest first
    let mut by_region: HashMap<&str, usize> = HashMap::new();
    for record in &records {
        *by_region.entry(record.kraj.as_str()).or_default() += 1;
    }
    let mut regions: Vec<(&str, usize)> = by_region.into_iter().collect();
    regions.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    println!("\nMunicipalities per region:");
    for (region, count) in regions {
        let label = if region.is_empty() { "(none)" } else { region };
        println!("  {label}: {count}");
    }

    println!("\nFirst 5:");
    for record in records.iter().take(5) {
        println!(
            "  - {} ({}): {}, {}",
            record.name, record.okres, record.lat, record.lon
        );
    }

    Ok(())
}
