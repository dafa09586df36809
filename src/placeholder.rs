//! `{name}` placeholder extraction, substitution and cross-locale checks.
//!
//! Substitution is literal: no escaping syntax, no recursion, and tokens
//! without a matching param stay in the output verbatim.

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::types::{LocaleData, Params};

lazy_static! {
    static ref PLACEHOLDER_REGEX: Regex = Regex::new(r"\{([^{}]+)\}").unwrap();
}

/// Replaces every `{name}` with its value in a single pass.
///
/// Inserted values are never scanned again, so the result does not depend
/// on param order. When a name appears twice in `params`, the first wins.
///
/// ```rust
/// use langkey::{Params, placeholder::substitute};
///
/// let params = Params::from([("name", "Al"), ("count", "3")]);
/// assert_eq!(
///     substitute("Hi {name}, you have {count} items", &params),
///     "Hi Al, you have 3 items"
/// );
/// ```
pub fn substitute(template: &str, params: &Params) -> String {
    if params.is_empty() {
        return template.to_string();
    }
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures<'_>| match params.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Placeholder names in a template, in occurrence order, duplicates kept.
pub fn extract_placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// A key whose placeholders differ between a locale and its reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderIssue {
    pub key: String,

    /// In the reference template but not in the translation.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub missing: Vec<String>,

    /// In the translation but not in the reference template.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub unexpected: Vec<String>,
}

/// Compares placeholder sets for every key present in both dictionaries.
pub fn compare_placeholders(data: &LocaleData, reference: &LocaleData) -> Vec<PlaceholderIssue> {
    let mut issues = Vec::new();

    for (key, reference_template) in &reference.dictionary {
        let Some(template) = data.dictionary.get(key) else {
            continue;
        };

        let expected: BTreeSet<&str> = extract_placeholders(reference_template)
            .into_iter()
            .collect();
        let actual: BTreeSet<&str> = extract_placeholders(template).into_iter().collect();
        if expected == actual {
            continue;
        }

        issues.push(PlaceholderIssue {
            key: key.clone(),
            missing: expected
                .difference(&actual)
                .map(|name| name.to_string())
                .collect(),
            unexpected: actual
                .difference(&expected)
                .map(|name| name.to_string())
                .collect(),
        });
    }

    issues
}
