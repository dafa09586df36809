//! The [`Registry`]: owner of locale data, canonical keys and coverage reports.
//!
//! Loading a locale or replacing the canonical key set recomputes coverage
//! reports immediately. Gaps are reported through `tracing` and never block
//! loading.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use crate::{
    config::RegistryConfig,
    coverage::compute_coverage,
    error::Error,
    keys::KeyFormatter,
    placeholder::{PlaceholderIssue, compare_placeholders},
    traits::Parser,
    types::{CoverageReport, LocaleData},
};

#[derive(Debug, Clone, PartialEq)]
struct LocaleEntry {
    locale: String,
    data: LocaleData,
}

/// Holds every loaded locale and answers lookups against them.
///
/// # Example
///
/// ```rust
/// use langkey::{LocaleData, Registry};
///
/// let mut registry = Registry::new();
/// registry.set_canonical_keys(["greeting", "farewell"]);
/// registry.load_locale("en", LocaleData::new().with_entry("greeting", "Hello").with_entry("farewell", "Bye"));
/// registry.load_locale("es", LocaleData::new().with_entry("greeting", "Hola"));
///
/// assert_eq!(registry.coverage_report("en").map(|r| r.coverage), Some(1.0));
/// assert_eq!(registry.coverage_report("es").map(|r| r.coverage), Some(0.5));
///
/// let key = registry.format_key("greeting");
/// assert_eq!(registry.translate_to(&key, "es"), "Hola");
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    pub(crate) formatter: KeyFormatter,
    /// Loaded locales, in first-load order.
    locales: Vec<LocaleEntry>,
    canonical_keys: Vec<String>,
    /// Accessor name → namespaced key, rebuilt with the canonical keys.
    accessors: BTreeMap<String, String>,
    reports: BTreeMap<String, CoverageReport>,
    current_locale: Option<String>,
    pub(crate) country_codes: Vec<(String, String)>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates a registry with the default configuration (`i18n` / `::`).
    pub fn new() -> Self {
        Registry {
            formatter: KeyFormatter::default(),
            locales: Vec::new(),
            canonical_keys: Vec::new(),
            accessors: BTreeMap::new(),
            reports: BTreeMap::new(),
            current_locale: None,
            country_codes: Vec::new(),
        }
    }

    /// Creates a registry from a validated configuration.
    pub fn with_config(config: RegistryConfig) -> Result<Self, Error> {
        config.validate()?;
        let RegistryConfig {
            header,
            separator,
            keys,
            country_codes,
        } = config;

        let mut registry = Registry {
            formatter: KeyFormatter::new(header, separator),
            country_codes,
            ..Registry::new()
        };
        registry.set_canonical_keys(keys);
        Ok(registry)
    }

    pub fn formatter(&self) -> &KeyFormatter {
        &self.formatter
    }

    // -----------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------

    /// Stores `data` for `locale`, replacing any previous data in full.
    ///
    /// When a canonical key set is defined, the locale's coverage report is
    /// recomputed right away.
    pub fn load_locale(&mut self, locale: impl Into<String>, data: impl Into<LocaleData>) {
        let locale = locale.into();
        let data = data.into();
        debug!(
            locale = %locale,
            languages = data.languages.len(),
            entries = data.dictionary.len(),
            "loading locale"
        );

        match self.locales.iter_mut().find(|entry| entry.locale == locale) {
            Some(entry) => entry.data = data,
            None => self.locales.push(LocaleEntry {
                locale: locale.clone(),
                data,
            }),
        }

        if !self.canonical_keys.is_empty() {
            self.refresh_report(&locale);
        }
    }

    /// Loads every `(locale, data)` pair in iteration order.
    pub fn load_locales<I, L, D>(&mut self, locales: I)
    where
        I: IntoIterator<Item = (L, D)>,
        L: Into<String>,
        D: Into<LocaleData>,
    {
        for (locale, data) in locales {
            self.load_locale(locale, data);
        }
    }

    /// Parses `json` as [`LocaleData`] and loads it.
    ///
    /// Parsing happens before the registry is touched; a parse error leaves
    /// any previously loaded data for `locale` in place.
    pub fn load_locale_json(&mut self, locale: impl Into<String>, json: &str) -> Result<(), Error> {
        let data = LocaleData::from_str(json)?;
        self.load_locale(locale, data);
        Ok(())
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.locale_data(locale).is_some()
    }

    /// Loaded locale identifiers in first-load order.
    pub fn locales(&self) -> Vec<&str> {
        self.locales
            .iter()
            .map(|entry| entry.locale.as_str())
            .collect()
    }

    pub fn locale_data(&self, locale: &str) -> Option<&LocaleData> {
        self.locales
            .iter()
            .find(|entry| entry.locale == locale)
            .map(|entry| &entry.data)
    }

    // -----------------------------------------------------------------
    // Canonical keys & coverage
    // -----------------------------------------------------------------

    /// Replaces the canonical key set and recomputes every locale's report.
    ///
    /// Duplicate keys are dropped, keeping the first occurrence. Replacing
    /// the set with an empty one discards all cached reports.
    pub fn set_canonical_keys<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        self.canonical_keys = keys
            .into_iter()
            .map(Into::<String>::into)
            .filter(|key| seen.insert(key.clone()))
            .collect();
        debug!(keys = self.canonical_keys.len(), "canonical keys replaced");

        self.rebuild_accessors();

        self.reports.clear();
        if self.canonical_keys.is_empty() {
            return;
        }
        let locales: Vec<String> = self.locales.iter().map(|e| e.locale.clone()).collect();
        for locale in &locales {
            self.refresh_report(locale);
        }
    }

    pub fn canonical_keys(&self) -> &[String] {
        &self.canonical_keys
    }

    /// Recomputes and caches the report for `locale`.
    ///
    /// Returns `None` when no canonical key set is defined or the locale is
    /// not loaded: coverage does not apply, which differs from zero coverage.
    pub fn validate_locale(&mut self, locale: &str) -> Option<&CoverageReport> {
        if self.canonical_keys.is_empty() || !self.has_locale(locale) {
            return None;
        }
        self.refresh_report(locale);
        self.reports.get(locale)
    }

    /// The last computed report for `locale`.
    ///
    /// Reports are invalidated when the canonical key set is replaced; after
    /// replacing it with an empty set no report is cached for any locale.
    pub fn coverage_report(&self, locale: &str) -> Option<&CoverageReport> {
        self.reports.get(locale)
    }

    /// Snapshot of every cached report.
    pub fn all_coverage_reports(&self) -> BTreeMap<String, CoverageReport> {
        self.reports.clone()
    }

    fn refresh_report(&mut self, locale: &str) {
        let Some(data) = self.locale_data(locale) else {
            return;
        };
        let report = compute_coverage(locale, &self.canonical_keys, &data.dictionary);

        if !report.is_complete() {
            warn!(
                locale = %locale,
                coverage = %format!("{:.1}%", report.percentage()),
                missing = report.missing_keys.len(),
                "locale dictionary is missing canonical keys"
            );
        }

        self.reports.insert(locale.to_string(), report);
    }

    // -----------------------------------------------------------------
    // Key formatting
    // -----------------------------------------------------------------

    /// `header + separator + bare_key`.
    pub fn format_key(&self, bare_key: &str) -> String {
        self.formatter.format_key(bare_key)
    }

    pub fn is_namespaced(&self, candidate: &str) -> bool {
        self.formatter.is_namespaced(candidate)
    }

    /// `(bare key, namespaced key)` for every canonical key, in canonical order.
    pub fn derive_all_keys(&self) -> Vec<(String, String)> {
        self.canonical_keys
            .iter()
            .map(|key| (key.clone(), self.formatter.format_key(key)))
            .collect()
    }

    /// Camel-case accessor name → namespaced key for every canonical key.
    pub fn accessors(&self) -> &BTreeMap<String, String> {
        &self.accessors
    }

    /// Namespaced key behind an accessor name such as `"userProfile"`.
    pub fn accessor(&self, name: &str) -> Option<&str> {
        self.accessors.get(name).map(String::as_str)
    }

    // Later keys win when two bare keys derive the same name.
    fn rebuild_accessors(&mut self) {
        self.accessors.clear();
        for key in &self.canonical_keys {
            let name = self.formatter.name_property_for(key);
            let namespaced = self.formatter.format_key(key);
            if let Some(previous) = self.accessors.insert(name.clone(), namespaced) {
                warn!(
                    accessor = %name,
                    replaced = %previous,
                    key = %key,
                    "accessor name collision"
                );
            }
        }
    }

    // -----------------------------------------------------------------
    // Current locale
    // -----------------------------------------------------------------

    /// Sets (or with `None`, clears) the locale used by [`Registry::translate`].
    ///
    /// Fails without changing state when `locale` was never loaded.
    pub fn set_language(&mut self, locale: Option<&str>) -> Result<(), Error> {
        match locale {
            Some(locale) if !self.has_locale(locale) => {
                Err(Error::UnknownLocale(locale.to_string()))
            }
            Some(locale) => {
                self.current_locale = Some(locale.to_string());
                Ok(())
            }
            None => {
                self.current_locale = None;
                Ok(())
            }
        }
    }

    pub fn current_language(&self) -> Option<&str> {
        self.current_locale.as_deref()
    }

    // -----------------------------------------------------------------
    // Country codes
    // -----------------------------------------------------------------

    /// Replaces the locale → country code table.
    pub fn set_country_codes<I, L, C>(&mut self, mappings: I)
    where
        I: IntoIterator<Item = (L, C)>,
        L: Into<String>,
        C: Into<String>,
    {
        self.country_codes = mappings
            .into_iter()
            .map(|(locale, code)| (locale.into(), code.into()))
            .collect();
    }

    /// Appends a mapping; earlier mappings for the same locale still win.
    pub fn add_country_code(&mut self, locale: impl Into<String>, code: impl Into<String>) {
        self.country_codes.push((locale.into(), code.into()));
    }

    // -----------------------------------------------------------------
    // Placeholders
    // -----------------------------------------------------------------

    /// Keys whose `{name}` placeholders in `locale` differ from `reference_locale`.
    ///
    /// Returns `None` when either locale is not loaded.
    pub fn placeholder_issues(
        &self,
        locale: &str,
        reference_locale: &str,
    ) -> Option<Vec<PlaceholderIssue>> {
        let data = self.locale_data(locale)?;
        let reference = self.locale_data(reference_locale)?;
        Some(compare_placeholders(data, reference))
    }
}
