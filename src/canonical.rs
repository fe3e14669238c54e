//! # Canonical Name Set
//!
//! The deduplicated target list of town names the merge resolves
//! against. Built either from the embedded curated list in
//! [`crate::defaults`] or from a user-supplied text file with names
//! separated by commas and/or newlines.
//!
//! Deduplication is done on the normalized key (see
//! [`crate::merge::normalize`]), keeping the first raw spelling seen,
//! so "Praha" and "praha" count as a single canonical entry. Iteration
//! order is first-occurrence order, which keeps merge runs
//! deterministic.

use std::collections::HashSet;

use crate::merge::normalize;

/// A deduplicated, order-preserving set of canonical town names.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalNames {
    names: Vec<String>,
}

impl CanonicalNames {
    /// Parse names from free-form text: entries split on commas and
    /// newlines, whitespace trimmed, blanks dropped.
    pub fn from_text(text: &str) -> Self {
        Self::from_names(text.split([',', '\n']).map(str::trim))
    }

    /// Build from an iterator of names, deduplicating by normalized key.
    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        let mut deduped = Vec::new();
        for name in names {
            if name.is_empty() {
                continue;
            }
            if seen.insert(normalize(name)) {
                deduped.push(name.to_string());
            }
        }
        CanonicalNames { names: deduped }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_splits_on_commas_and_newlines() {
        let names = CanonicalNames::from_text("Praha, Brno\nOstrava,\n Plzeň ");
        let collected: Vec<&str> = names.iter().collect();
        assert_eq!(collected, vec!["Praha", "Brno", "Ostrava", "Plzeň"]);
    }

    #[test]
    fn test_from_text_skips_blank_entries() {
        let names = CanonicalNames::from_text(",,\n ,Cheb,");
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_dedup_is_case_insensitive_keeping_first_spelling() {
        let names = CanonicalNames::from_text("Praha,praha,PRAHA");
        assert_eq!(names.len(), 1);
        assert_eq!(names.iter().next(), Some("Praha"));
    }

    #[test]
    fn test_dedup_preserves_first_occurrence_order() {
        let names = CanonicalNames::from_text("Znojmo,Aš,Znojmo,Brno,aš");
        let collected: Vec<&str> = names.iter().collect();
        assert_eq!(collected, vec!["Znojmo", "Aš", "Brno"]);
    }

    #[test]
    fn test_diacritics_stay_distinct() {
        let names = CanonicalNames::from_text("Príbram,Příbram");
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let names = CanonicalNames::from_text("");
        assert!(names.is_empty());
        assert_eq!(names.len(), 0);
    }
}
