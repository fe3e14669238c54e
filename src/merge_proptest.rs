//! Property-based tests for the merge engine.
//!
//! These tests use proptest to generate random canonical sets and record
//! lists and verify that the merge invariants hold for all inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::canonical::CanonicalNames;
    use crate::merge::{merge, normalize};
    use crate::record::Record;
    use proptest::prelude::*;

    /// Town-ish names: short strings over a Czech-flavored alphabet,
    /// never empty.
    fn name_strategy() -> impl Strategy<Value = String> {
        "[A-Za-zÁČĎÉĚÍŇÓŘŠŤÚŮÝŽáčďéěíňóřšťúůýž]{1,12}"
    }

    fn records_strategy() -> impl Strategy<Value = Vec<Record>> {
        prop::collection::vec(name_strategy(), 0..40)
            .prop_map(|names| names.iter().map(|n| Record::new(n, 50.0, 14.0)).collect())
    }

    fn canonical_strategy() -> impl Strategy<Value = CanonicalNames> {
        prop::collection::vec(name_strategy(), 0..40)
            .prop_map(|names| CanonicalNames::from_names(names.iter().map(String::as_str)))
    }

    proptest! {
        /// Property: every canonical name lands in exactly one partition.
        #[test]
        fn merge_partition_counts_add_up(
            canonical in canonical_strategy(),
            records in records_strategy(),
        ) {
            let result = merge(&canonical, &records);
            prop_assert_eq!(
                result.matched.len() + result.unmatched.len(),
                canonical.len()
            );
        }

        /// Property: merge is deterministic, order of output included.
        #[test]
        fn merge_is_idempotent(
            canonical in canonical_strategy(),
            records in records_strategy(),
        ) {
            let first = merge(&canonical, &records);
            let second = merge(&canonical, &records);
            prop_assert_eq!(first, second);
        }

        /// Property: every matched record's normalized name appears in the
        /// canonical set, and every unmatched name has no record with its key.
        #[test]
        fn merge_partitions_are_consistent(
            canonical in canonical_strategy(),
            records in records_strategy(),
        ) {
            let result = merge(&canonical, &records);

            let canonical_keys: std::collections::HashSet<String> =
                canonical.iter().map(normalize).collect();
            for record in &result.matched {
                prop_assert!(canonical_keys.contains(&normalize(&record.name)));
            }

            let record_keys: std::collections::HashSet<String> =
                records.iter().map(|r| normalize(&r.name)).collect();
            for name in &result.unmatched {
                prop_assert!(!record_keys.contains(&normalize(name)));
            }
        }

        /// Property: normalize is deterministic and idempotent.
        #[test]
        fn normalize_is_idempotent(name in name_strategy()) {
            let once = normalize(&name);
            let twice = normalize(&once);
            prop_assert_eq!(once, twice);
        }

        /// Property: canonical dedup never grows the input and never
        /// keeps two entries with the same normalized key.
        #[test]
        fn canonical_dedup_is_sound(names in prop::collection::vec(name_strategy(), 0..40)) {
            let canonical = CanonicalNames::from_names(names.iter().map(String::as_str));
            prop_assert!(canonical.len() <= names.len());

            let keys: Vec<String> = canonical.iter().map(normalize).collect();
            let unique: std::collections::HashSet<&String> = keys.iter().collect();
            prop_assert_eq!(unique.len(), keys.len());
        }
    }
}
