//! Dictionary coverage against the canonical key set.

use std::collections::{BTreeMap, HashSet};

use crate::types::CoverageReport;

/// Diffs a dictionary against the canonical keys.
///
/// `missing_keys` keeps the canonical order, `extra_keys` follows the
/// dictionary's sorted order. An empty canonical set is fully covered.
pub fn compute_coverage(
    locale: &str,
    canonical: &[String],
    dictionary: &BTreeMap<String, String>,
) -> CoverageReport {
    let canonical_set: HashSet<&str> = canonical.iter().map(String::as_str).collect();

    let mut seen = HashSet::new();
    let missing_keys: Vec<String> = canonical
        .iter()
        .filter(|key| seen.insert(key.as_str()))
        .filter(|key| !dictionary.contains_key(key.as_str()))
        .cloned()
        .collect();

    let extra_keys: Vec<String> = dictionary
        .keys()
        .filter(|key| !canonical_set.contains(key.as_str()))
        .cloned()
        .collect();

    let total = canonical_set.len();
    let coverage = if total == 0 {
        1.0
    } else {
        (total - missing_keys.len()) as f64 / total as f64
    };

    CoverageReport {
        locale: locale.to_string(),
        missing_keys,
        extra_keys,
        coverage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn dict(items: &[(&str, &str)]) -> BTreeMap<String, String> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_full_coverage() {
        let report = compute_coverage(
            "en",
            &keys(&["greeting", "farewell"]),
            &dict(&[("greeting", "Hello"), ("farewell", "Bye")]),
        );
        assert_eq!(report.coverage, 1.0);
        assert!(report.missing_keys.is_empty());
        assert!(report.extra_keys.is_empty());
    }

    #[test]
    fn test_partial_coverage() {
        let report = compute_coverage(
            "es",
            &keys(&["greeting", "farewell"]),
            &dict(&[("greeting", "Hola")]),
        );
        assert_eq!(report.locale, "es");
        assert_eq!(report.missing_keys, keys(&["farewell"]));
        assert!(report.extra_keys.is_empty());
        assert_eq!(report.coverage, 0.5);
    }

    #[test]
    fn test_missing_keys_keep_canonical_order() {
        let report = compute_coverage("fr", &keys(&["z", "a", "m"]), &dict(&[]));
        assert_eq!(report.missing_keys, keys(&["z", "a", "m"]));
        assert_eq!(report.coverage, 0.0);
    }

    #[test]
    fn test_extra_keys() {
        let report = compute_coverage(
            "de",
            &keys(&["greeting"]),
            &dict(&[("greeting", "Hallo"), ("zeta", "Z"), ("alpha", "A")]),
        );
        assert_eq!(report.extra_keys, keys(&["alpha", "zeta"]));
        assert_eq!(report.coverage, 1.0);
    }

    #[test]
    fn test_empty_canonical_set_is_vacuously_covered() {
        let report = compute_coverage("en", &[], &dict(&[("greeting", "Hello")]));
        assert_eq!(report.coverage, 1.0);
        assert!(report.missing_keys.is_empty());
        assert_eq!(report.extra_keys, keys(&["greeting"]));
    }

    #[test]
    fn test_duplicate_canonical_keys_count_once() {
        let report = compute_coverage("en", &keys(&["a", "a", "b"]), &dict(&[("b", "B")]));
        assert_eq!(report.missing_keys, keys(&["a"]));
        assert_eq!(report.coverage, 0.5);
    }
}
