//! # Sorter/Writer
//!
//! Orders records by display name and serializes them to a UTF-8,
//! human-readable JSON file.
//!
//! The sort is the standard stable sort on code-point ordering,
//! locale-naive; re-sorting already sorted output is a no-op. The
//! serialized body is built fully in memory before the target file is
//! touched, so a failed run never destroys the previous output.
//! Non-ASCII names are written literally, not escaped.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::record::Named;

/// Stable lexicographic sort by display name (code-point ordering).
pub fn sort_by_name<T: Named>(records: &mut [T]) {
    records.sort_by(|a, b| a.name().cmp(b.name()));
}

/// Serialize records as pretty-printed JSON and overwrite `path`.
pub fn write_json<T: Serialize>(records: &[T], path: &Path) -> Result<()> {
    let body = serde_json::to_string_pretty(records)?;
    fs::write(path, body).map_err(|e| Error::Filesystem {
        message: format!("Failed to write '{}': {}", path.display(), e),
    })
}
