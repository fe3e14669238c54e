//! # Merge/Match Engine
//!
//! Joins a canonical list of town names against loaded municipality
//! records by normalized key, partitioning the names into matched and
//! unmatched. Pure and free of I/O so it can be unit-tested with
//! in-memory fixtures.
//!
//! ## Matching rules
//!
//! - The key is [`normalize`] of the display name: lowercasing, nothing
//!   else. Names differing only by diacritics or punctuation are
//!   distinct keys.
//! - Exact normalized-string equality only; no fuzzy matching.
//! - When two records share a key, the first occurrence wins and later
//!   ones are dropped silently.
//! - An unmatched canonical name is data for operator review, never an
//!   error; `matched.len() + unmatched.len()` always equals the size of
//!   the (deduplicated) canonical set.

use std::collections::HashMap;

use crate::canonical::CanonicalNames;
use crate::record::Record;

/// Derive the lookup key for a display name.
///
/// Lowercases the input (Unicode-aware) and does nothing else: no
/// accent stripping, no whitespace trimming beyond what the source
/// guarantees. Deterministic and pure.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
}

/// Partition of canonical names after a merge run.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeResult {
    /// Records found for canonical names, projected to the merged field
    /// subset. Order follows the canonical set; the writer sorts later.
    pub matched: Vec<Record>,
    /// Canonical names with no matching record, in canonical order.
    pub unmatched: Vec<String>,
}

/// Join canonical names against records by normalized key.
pub fn merge(canonical: &CanonicalNames, records: &[Record]) -> MergeResult {
    let mut index: HashMap<String, &Record> = HashMap::new();
    for record in records {
        // First occurrence wins; downstream consumers may rely on it.
        index.entry(normalize(&record.name)).or_insert(record);
    }

    let mut matched = Vec::new();
    let mut unmatched = Vec::new();
    for name in canonical.iter() {
        match index.get(&normalize(name)) {
            Some(record) => matched.push(record.projected()),
            None => unmatched.push(name.to_string()),
        }
    }

    MergeResult { matched, unmatched }
}
