//! # obce
//!
//! Library behind the `obce` command-line tool, which builds the static
//! JSON reference files of Czech municipalities and towns consumed by
//! downstream sites: fetching source datasets, converting a local CSV
//! export, and merging a curated town list against the full
//! municipality data.
//!
//! ## Quick Example
//!
//! ```
//! use obce::canonical::CanonicalNames;
//! use obce::merge;
//! use obce::record::Record;
//!
//! let canonical = CanonicalNames::from_text("Praha, Brno, Unknownville");
//! let records = vec![Record::new("praha", 50.0875, 14.4213)];
//!
//! let result = merge::merge(&canonical, &records);
//! assert_eq!(result.matched.len(), 1);
//! assert_eq!(result.unmatched, vec!["Brno", "Unknownville"]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Records (`record`)**: the flat place records the output files
//!   carry, one shape for municipalities and one for city/town nodes.
//! - **Source Loaders (`source`)**: bring external datasets into
//!   memory — the Overpass API with a mirror-fallback list, the
//!   czech-cities CSV export, and local delimited files. The HTTP layer
//!   sits behind a trait so loaders are testable without network.
//! - **Canonical Names (`canonical`)**: the deduplicated target list of
//!   town names to resolve.
//! - **Merge Engine (`merge`)**: pure join of canonical names against
//!   records by case-folded key, partitioning into matched/unmatched.
//!   Kept free of I/O so it is unit-testable with in-memory fixtures.
//! - **Writer (`writer`)**: code-point sort by name plus pretty JSON
//!   output, overwriting the previous file only on a successful run.
//!
//! Every run is a single linear pass: load, merge or convert, sort,
//! write. There is no persistent state between runs beyond the output
//! files themselves.

pub mod canonical;
pub mod defaults;
pub mod error;
pub mod merge;
pub mod output;
pub mod record;
pub mod source;
pub mod writer;

#[cfg(test)]
mod merge_proptest;
