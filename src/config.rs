//! Construction-time configuration for [`crate::Registry`].

use serde::{Deserialize, Serialize};

use crate::{error::Error, traits::impl_json_parser};

pub const DEFAULT_HEADER: &str = "i18n";
pub const DEFAULT_SEPARATOR: &str = "::";

/// Namespace settings, initial canonical keys and the country-code table.
///
/// Every field is optional in JSON; absent fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistryConfig {
    /// Namespace prefix of every lookup key. Defaults to `"i18n"`.
    pub header: String,

    /// Delimiter between header and bare key. Defaults to `"::"`.
    pub separator: String,

    /// Initial canonical key set.
    pub keys: Vec<String>,

    /// Locale → country code pairs, first match wins.
    #[serde(alias = "countryCodeMappings")]
    pub country_codes: Vec<(String, String)>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            keys: Vec::new(),
            country_codes: Vec::new(),
        }
    }
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_country_codes<I, L, C>(mut self, mappings: I) -> Self
    where
        I: IntoIterator<Item = (L, C)>,
        L: Into<String>,
        C: Into<String>,
    {
        self.country_codes = mappings
            .into_iter()
            .map(|(locale, code)| (locale.into(), code.into()))
            .collect();
        self
    }

    /// Header and separator must be non-empty, otherwise namespaced keys
    /// cannot be told apart from bare ones.
    pub fn validate(&self) -> Result<(), Error> {
        if self.header.is_empty() {
            return Err(Error::invalid_config("header must not be empty"));
        }
        if self.separator.is_empty() {
            return Err(Error::invalid_config("separator must not be empty"));
        }
        Ok(())
    }
}

impl_json_parser!(RegistryConfig);
