//! Translation lookups on [`Registry`].
//!
//! Content gaps never fail: an unknown locale or key comes back as a sentinel
//! string built from the original key, so callers can translate speculatively.
//! Only [`Registry::translate`] without a configured default locale errors.

use tracing::debug;

use crate::{error::Error, placeholder::substitute, registry::Registry, types::Params};

pub const MISSING_LOCALE_SUFFIX: &str = "error-missing-locale";
pub const MISSING_KEY_SUFFIX: &str = "error-missing-key";
pub const UNKNOWN_COUNTRY_CODE: &str = "XX";

impl Registry {
    /// Translates a namespaced key into `locale`.
    ///
    /// - Keys not starting with the header, and malformed namespaced keys,
    ///   are returned unchanged.
    /// - An unloaded locale yields `<key><sep><locale><sep>error-missing-locale`.
    /// - An absent or empty template yields `<key><sep><locale><sep>error-missing-key`.
    pub fn translate_to(&self, key: &str, locale: &str) -> String {
        self.translate_to_with(key, locale, Params::new())
    }

    /// [`Registry::translate_to`] with `{name}` substitution.
    ///
    /// ```rust
    /// use langkey::{LocaleData, Registry};
    ///
    /// let mut registry = Registry::new();
    /// registry.load_locale("en", LocaleData::new().with_entry("cart", "Hi {name}, you have {count} items"));
    ///
    /// let text = registry.translate_to_with("i18n::cart", "en", [("name", "Al"), ("count", "3")]);
    /// assert_eq!(text, "Hi Al, you have 3 items");
    /// ```
    pub fn translate_to_with(&self, key: &str, locale: &str, params: impl Into<Params>) -> String {
        if !self.formatter.is_namespaced(key) {
            return key.to_string();
        }
        let Some(bare_key) = self.formatter.parse_key(key) else {
            return key.to_string();
        };

        let Some(data) = self.locale_data(locale) else {
            debug!(key, locale, "translation requested for unloaded locale");
            return self.sentinel(key, locale, MISSING_LOCALE_SUFFIX);
        };
        let Some(template) = data.template(bare_key) else {
            debug!(key, locale, "translation key missing from dictionary");
            return self.sentinel(key, locale, MISSING_KEY_SUFFIX);
        };

        substitute(template, &params.into())
    }

    /// Translates into the locale set with [`Registry::set_language`].
    pub fn translate(&self, key: &str) -> Result<String, Error> {
        self.translate_with(key, Params::new())
    }

    /// [`Registry::translate`] with `{name}` substitution.
    pub fn translate_with(&self, key: &str, params: impl Into<Params>) -> Result<String, Error> {
        let locale = self.current_language().ok_or(Error::NoDefaultLocale)?;
        Ok(self.translate_to_with(key, locale, params))
    }

    /// Display name of language `code` as written in `locale`.
    ///
    /// Falls back to `code` itself when `locale` has no name for it, and to
    /// the missing-locale sentinel when `locale` is not loaded.
    pub fn language_name(&self, code: &str, locale: &str) -> String {
        match self.locale_data(locale) {
            Some(data) => data
                .languages
                .get(code)
                .cloned()
                .unwrap_or_else(|| code.to_string()),
            None => self.sentinel(code, locale, MISSING_LOCALE_SUFFIX),
        }
    }

    /// Country code mapped to `locale`, first mapping wins, `"XX"` when unmapped.
    pub fn country_code(&self, locale: &str) -> &str {
        self.country_codes
            .iter()
            .find(|(mapped, _)| mapped == locale)
            .map(|(_, code)| code.as_str())
            .unwrap_or(UNKNOWN_COUNTRY_CODE)
    }

    fn sentinel(&self, key: &str, locale: &str, suffix: &str) -> String {
        let separator = self.formatter.separator();
        format!("{key}{separator}{locale}{separator}{suffix}")
    }
}
