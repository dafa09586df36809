//! Namespaced key formatting and accessor-name derivation.
//!
//! A namespaced key is `<header><separator><bare key>`, e.g. `i18n::greeting`.
//! Only namespaced keys are accepted by the translator; bare keys are what
//! dictionaries and the canonical key set store.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::{DEFAULT_HEADER, DEFAULT_SEPARATOR};

lazy_static! {
    // Anything that is not a letter or digit separates accessor segments.
    static ref SEGMENT_DELIMITER: Regex = Regex::new(r"[^\p{L}\p{N}]+").unwrap();
}

/// Converts between bare keys and namespaced keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFormatter {
    header: String,
    separator: String,
}

impl Default for KeyFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER, DEFAULT_SEPARATOR)
    }
}

impl KeyFormatter {
    pub fn new(header: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            separator: separator.into(),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Prefixes `bare_key` with the header and separator.
    ///
    /// The bare key is not validated; an embedded separator is kept verbatim.
    ///
    /// ```rust
    /// use langkey::KeyFormatter;
    ///
    /// assert_eq!(KeyFormatter::default().format_key("greeting"), "i18n::greeting");
    /// ```
    pub fn format_key(&self, bare_key: &str) -> String {
        let mut key =
            String::with_capacity(self.header.len() + self.separator.len() + bare_key.len());
        key.push_str(&self.header);
        key.push_str(&self.separator);
        key.push_str(bare_key);
        key
    }

    /// Prefix test only: `"i18nfoo"` counts as namespaced here and is
    /// rejected later by [`KeyFormatter::parse_key`].
    pub fn is_namespaced(&self, candidate: &str) -> bool {
        candidate.starts_with(&self.header)
    }

    /// Extracts the bare key: everything after the header and the separator
    /// that immediately follows it.
    ///
    /// The header may itself contain the separator (`my.app` with `.`).
    /// Returns `None` when the header is not followed by the separator or
    /// when the bare key is empty.
    pub fn parse_key<'a>(&self, namespaced: &'a str) -> Option<&'a str> {
        let bare = namespaced
            .strip_prefix(self.header.as_str())?
            .strip_prefix(self.separator.as_str())?;
        (!bare.is_empty()).then_some(bare)
    }

    /// Derives a camel-case identifier from a delimiter-separated bare key.
    ///
    /// Hyphens, underscores and dots separate segments, and so does every
    /// other character that is neither a letter nor a digit (spaces, `::`,
    /// `/`), since none of them may appear in an identifier.
    ///
    /// `"user-profile.title"` becomes `"userProfileTitle"`. Keys that would
    /// start with a digit are prefixed with `_`, keys with no letters or
    /// digits at all become `"_"`.
    pub fn name_property_for(&self, bare_key: &str) -> String {
        let mut name = String::with_capacity(bare_key.len());
        for segment in SEGMENT_DELIMITER
            .split(bare_key)
            .filter(|segment| !segment.is_empty())
        {
            let mut chars = segment.chars();
            let Some(first) = chars.next() else {
                continue;
            };
            if name.is_empty() {
                name.extend(first.to_lowercase());
            } else {
                name.extend(first.to_uppercase());
            }
            name.push_str(chars.as_str());
        }

        match name.chars().next() {
            None => "_".to_string(),
            Some(c) if c.is_numeric() => format!("_{name}"),
            Some(_) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_key_default() {
        let formatter = KeyFormatter::default();
        assert_eq!(formatter.format_key("greeting"), "i18n::greeting");
        assert_eq!(formatter.format_key(""), "i18n::");
    }

    #[test]
    fn test_format_key_keeps_embedded_separator() {
        let formatter = KeyFormatter::default();
        assert_eq!(formatter.format_key("a::b"), "i18n::a::b");
        assert_eq!(formatter.parse_key("i18n::a::b"), Some("a::b"));
    }

    #[test]
    fn test_is_namespaced_is_prefix_only() {
        let formatter = KeyFormatter::default();
        assert!(formatter.is_namespaced("i18n::greeting"));
        assert!(formatter.is_namespaced("i18nfoo"));
        assert!(!formatter.is_namespaced("greeting"));
        assert!(!formatter.is_namespaced("I18N::greeting"));
    }

    #[test]
    fn test_parse_key_rejects_malformed() {
        let formatter = KeyFormatter::default();
        assert_eq!(formatter.parse_key("i18n::greeting"), Some("greeting"));
        assert_eq!(formatter.parse_key("i18nfoo"), None);
        assert_eq!(formatter.parse_key("i18nfoo::bar"), None);
        assert_eq!(formatter.parse_key("i18n::"), None);
        assert_eq!(formatter.parse_key("greeting"), None);
    }

    #[test]
    fn test_custom_header_and_separator() {
        let formatter = KeyFormatter::new("app", ".");
        assert_eq!(formatter.format_key("title"), "app.title");
        assert_eq!(formatter.parse_key("app.menu.open"), Some("menu.open"));
        assert_eq!(formatter.parse_key("application.title"), None);
    }

    #[test]
    fn test_header_containing_separator_round_trips() {
        let formatter = KeyFormatter::new("my.app", ".");
        let key = formatter.format_key("title");
        assert_eq!(key, "my.app.title");
        assert_eq!(formatter.parse_key(&key), Some("title"));
        assert_eq!(formatter.parse_key("my.app.menu.open"), Some("menu.open"));
        assert_eq!(formatter.parse_key("my.apptitle"), None);
        assert_eq!(formatter.parse_key("my.title"), None);
    }

    #[test]
    fn test_name_property_for() {
        let formatter = KeyFormatter::default();
        assert_eq!(formatter.name_property_for("greeting"), "greeting");
        assert_eq!(formatter.name_property_for("user-profile"), "userProfile");
        assert_eq!(formatter.name_property_for("user_profile"), "userProfile");
        assert_eq!(formatter.name_property_for("user.profile.title"), "userProfileTitle");
        assert_eq!(formatter.name_property_for("Menu--Open"), "menuOpen");
        assert_eq!(formatter.name_property_for("_leading"), "leading");
        assert_eq!(formatter.name_property_for("404-page"), "_404Page");
        assert_eq!(formatter.name_property_for("---"), "_");
        assert_eq!(formatter.name_property_for("café-menü"), "caféMenü");
        assert_eq!(formatter.name_property_for("menu::open"), "menuOpen");
        assert_eq!(formatter.name_property_for("save file/as"), "saveFileAs");
    }
}
