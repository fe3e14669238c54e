//! # Merge-Towns Command
//!
//! Joins the canonical town list against previously fetched
//! municipality data and writes the merged, name-sorted result.
//!
//! The canonical names come from the embedded curated list or, with
//! `--names`, from a text file with names separated by commas and/or
//! newlines. Canonical names with no matching municipality are reported
//! for operator review; partial matches never fail the run.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use obce::canonical::CanonicalNames;
use obce::defaults;
use obce::merge;
use obce::output::{marker, OutputConfig};
use obce::source;
use obce::writer;

/// Merge the canonical town list against municipality data
#[derive(Args, Debug)]
pub struct MergeTownsArgs {
    /// Municipality JSON file produced by fetch-municipalities or convert.
    #[arg(short, long, value_name = "FILE", default_value = defaults::MUNICIPALITIES_JSON)]
    pub input: PathBuf,

    /// Text file with canonical town names (comma/newline separated).
    /// Defaults to the embedded curated list.
    #[arg(long, value_name = "FILE")]
    pub names: Option<PathBuf>,

    /// Output file for the merged town JSON.
    #[arg(short, long, value_name = "FILE", default_value = defaults::COMPLETE_JSON)]
    pub output: PathBuf,
}

/// Execute the `merge-towns` command.
pub fn execute(args: MergeTownsArgs, out: &OutputConfig) -> Result<()> {
    let records = source::load_json_records(&args.input)
        .with_context(|| format!("Failed to load municipality data from {}", args.input.display()))?;

    let canonical = match &args.names {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read names file {}", path.display()))?;
            CanonicalNames::from_text(&text)
        }
        None => CanonicalNames::from_names(defaults::CANONICAL_TOWNS.iter().copied()),
    };

    println!("Unique towns in the canonical list: {}", canonical.len());
    println!("Municipality records loaded: {}", records.len());

    let result = merge::merge(&canonical, &records);

    println!("Towns found: {}", result.matched.len());
    println!("Towns not found: {}", result.unmatched.len());
    if !result.unmatched.is_empty() {
        println!("Not found (first 20):");
        for name in result.unmatched.iter().take(20) {
            println!("  - {name}");
        }
    }

    let mut matched = result.matched;
    writer::sort_by_name(&mut matched);
    writer::write_json(&matched, &args.output)?;

    println!(
        "\n{} Saved {} towns to {}",
        marker(out, "✓", "[OK]"),
        matched.len(),
        args.output.display()
    );

    Ok(())
}
