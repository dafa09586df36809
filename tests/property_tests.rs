use std::collections::{BTreeMap, BTreeSet};

use langkey::coverage::compute_coverage;
use langkey::{LocaleData, Params, Registry};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_.-]{0,15}").expect("valid key regex")
}

fn value_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 ,!?]{1,30}").expect("valid value regex")
}

fn canonical_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(key_strategy(), 0..10).prop_map(|keys| keys.into_iter().collect())
}

proptest! {
    #[test]
    fn format_key_wraps_bare_key(key in key_strategy()) {
        let registry = Registry::new();
        let namespaced = registry.format_key(&key);
        prop_assert!(namespaced.starts_with("i18n::"));
        prop_assert!(namespaced.ends_with(&key));
    }

    #[test]
    fn non_namespaced_input_passes_through(
        text in "[^i].{0,30}",
        locale in "[a-z]{2}",
    ) {
        let mut registry = Registry::new();
        registry.load_locale("en", LocaleData::new().with_entry("greeting", "Hello"));
        prop_assert_eq!(registry.translate_to(&text, &locale), text.clone());
        prop_assert_eq!(registry.translate_to(&text, "en"), text);
    }

    #[test]
    fn loaded_values_round_trip(dictionary in prop::collection::btree_map(key_strategy(), value_strategy(), 1..8)) {
        let mut registry = Registry::new();
        registry.set_canonical_keys(dictionary.keys().cloned());
        registry.load_locale("en", LocaleData { languages: BTreeMap::new(), dictionary: dictionary.clone() });

        for (key, value) in &dictionary {
            prop_assert_eq!(&registry.translate_to(&registry.format_key(key), "en"), value);
        }
        prop_assert_eq!(registry.coverage_report("en").map(|r| r.coverage), Some(1.0));
    }

    #[test]
    fn unloaded_locale_yields_sentinel(key in key_strategy()) {
        let registry = Registry::new();
        let text = registry.translate_to(&registry.format_key(&key), "zz");
        prop_assert!(text.contains("error-missing-locale"));
    }

    #[test]
    fn coverage_matches_translated_fraction(
        canonical in canonical_strategy(),
        selector in prop::collection::vec(any::<bool>(), 10),
        extras in prop::collection::btree_set("[A-Z]{3}", 0..4),
    ) {
        let translated: BTreeSet<&String> = canonical
            .iter()
            .zip(&selector)
            .filter(|(_, keep)| **keep)
            .map(|(key, _)| key)
            .collect();
        let mut dictionary: BTreeMap<String, String> =
            translated.iter().map(|key| (key.to_string(), "v".to_string())).collect();
        for extra in &extras {
            dictionary.insert(extra.clone(), "x".to_string());
        }

        let report = compute_coverage("xx", &canonical, &dictionary);
        let n = canonical.len();
        let m = translated.len();

        prop_assert_eq!(report.missing_keys.len(), n - m);
        prop_assert_eq!(report.extra_keys.len(), extras.len());
        if n == 0 {
            prop_assert_eq!(report.coverage, 1.0);
        } else {
            prop_assert!((report.coverage - m as f64 / n as f64).abs() < 1e-12);
        }
        prop_assert_eq!(report.coverage == 1.0, report.missing_keys.is_empty());
    }

    #[test]
    fn unreferenced_params_are_ignored(name in "[a-z]{1,8}", value in value_strategy()) {
        let mut registry = Registry::new();
        registry.load_locale("en", LocaleData::new().with_entry("plain", "Nothing {here}"));
        let params = Params::new().with(format!("{name}_unused"), value);
        prop_assert_eq!(
            registry.translate_to_with("i18n::plain", "en", params),
            "Nothing {here}"
        );
    }
}
