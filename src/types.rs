//! Core data types for langkey.
//! Loaders ingest these; the registry owns them once loaded.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{error::Error, traits::impl_json_parser};

/// Everything the registry knows about one locale.
///
/// Both tables are optional in JSON input and default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocaleData {
    /// Language code → display name in this locale (e.g. `"fr"` → `"French"`).
    #[serde(default)]
    pub languages: BTreeMap<String, String>,

    /// Bare key → template string with `{name}` placeholders.
    #[serde(default)]
    pub dictionary: BTreeMap<String, String>,
}

impl LocaleData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a language display name.
    pub fn with_language(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.languages.insert(code.into(), name.into());
        self
    }

    /// Adds a dictionary entry.
    pub fn with_entry(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.dictionary.insert(key.into(), template.into());
        self
    }

    /// Looks up a template, treating empty templates as absent.
    pub fn template(&self, key: &str) -> Option<&str> {
        self.dictionary
            .get(key)
            .map(String::as_str)
            .filter(|template| !template.is_empty())
    }
}

impl<L, D, K1, V1, K2, V2> From<(L, D)> for LocaleData
where
    L: IntoIterator<Item = (K1, V1)>,
    D: IntoIterator<Item = (K2, V2)>,
    K1: Into<String>,
    V1: Into<String>,
    K2: Into<String>,
    V2: Into<String>,
{
    fn from((languages, dictionary): (L, D)) -> Self {
        LocaleData {
            languages: languages
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            dictionary: dictionary
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Locale identifier → data, as accepted by [`crate::Registry::load_locales`].
pub type LocaleBundle = BTreeMap<String, LocaleData>;

impl_json_parser!(LocaleData, LocaleBundle);

/// How completely one locale's dictionary covers the canonical key set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageReport {
    pub locale: String,

    /// Canonical keys absent from the dictionary, in canonical order.
    pub missing_keys: Vec<String>,

    /// Dictionary keys absent from the canonical set, sorted.
    pub extra_keys: Vec<String>,

    /// `translated / canonical`, `1.0` when the canonical set is empty.
    pub coverage: f64,
}

impl CoverageReport {
    /// Whether every canonical key is translated.
    pub fn is_complete(&self) -> bool {
        self.missing_keys.is_empty()
    }

    /// Coverage scaled to 0-100.
    pub fn percentage(&self) -> f64 {
        self.coverage * 100.0
    }
}

/// Placeholder values for substitution, as ordered `(name, value)` pairs.
///
/// Pairs, maps and JSON objects all convert into `Params`:
///
/// ```rust
/// use std::collections::BTreeMap;
/// use langkey::Params;
///
/// let from_pairs = Params::from([("name", "Al"), ("count", "3")]);
/// let from_map: Params = BTreeMap::from([("count", 3), ("name", 0)]).into();
/// let from_json = Params::try_from(serde_json::json!({ "name": "Al", "count": 3 }))?;
///
/// assert_eq!(from_pairs.get("count"), Some("3"));
/// assert_eq!(from_map.get("count"), Some("3"));
/// assert_eq!(from_json.get("name"), Some("Al"));
/// # Ok::<(), langkey::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair. When a name repeats, the first pair wins.
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl ToString) {
        self.0.push((name.into(), value.to_string()));
    }

    /// First value registered under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for Params {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: ToString> From<Vec<(K, V)>> for Params {
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<&[(&str, &str)]> for Params {
    fn from(pairs: &[(&str, &str)]) -> Self {
        pairs.iter().copied().collect()
    }
}

impl<K: Into<String>, V: ToString> From<BTreeMap<K, V>> for Params {
    fn from(map: BTreeMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<String>, V: ToString, S> From<HashMap<K, V, S>> for Params {
    fn from(map: HashMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Map<String, Value>> for Params {
    fn from(object: Map<String, Value>) -> Self {
        Params(
            object
                .into_iter()
                .map(|(name, value)| (name, json_param_value(value)))
                .collect(),
        )
    }
}

impl TryFrom<Value> for Params {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(object) => Ok(Params::from(object)),
            Value::Null => Ok(Params::new()),
            other => Err(Error::invalid_params(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }
}

// Strings substitute without their JSON quotes.
fn json_param_value(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
