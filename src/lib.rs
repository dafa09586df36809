#![forbid(unsafe_code)]
//! Namespaced translation keys for Rust.
//!
//! Look up localized strings by `<header><separator><key>` (e.g. `i18n::greeting`),
//! substitute `{name}` placeholders, and track how completely each locale's
//! dictionary covers a canonical key set.
//!
//! # Quick Start
//!
//! ```rust
//! use langkey::{LocaleData, Registry};
//!
//! let mut registry = Registry::new();
//! registry.set_canonical_keys(["greeting", "farewell"]);
//! registry.load_locale_json("en", r#"{ "dictionary": { "greeting": "Hello {name}", "farewell": "Bye" } }"#)?;
//! registry.load_locale("es", LocaleData::new().with_entry("greeting", "Hola {name}"));
//!
//! let greeting = registry.format_key("greeting");
//! assert_eq!(registry.translate_to_with(&greeting, "es", [("name", "Ana")]), "Hola Ana");
//! assert_eq!(registry.coverage_report("es").map(|r| r.missing_keys.len()), Some(1));
//!
//! registry.set_language(Some("en"))?;
//! assert_eq!(registry.translate_with(&greeting, [("name", "Al")])?, "Hello Al");
//! # Ok::<(), langkey::Error>(())
//! ```
//!
//! # Failure model
//!
//! - Missing locales and keys are answered with sentinel strings, never errors.
//! - Using [`Registry::translate`] before [`Registry::set_language`], or setting
//!   an unloaded language, is an [`Error`].
//! - Incomplete dictionaries are reported through `tracing` and coverage
//!   reports; they never block loading.

pub mod config;
pub mod coverage;
pub mod error;
pub mod keys;
pub mod placeholder;
pub mod registry;
pub mod traits;
pub mod translator;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    config::RegistryConfig,
    error::Error,
    keys::KeyFormatter,
    placeholder::PlaceholderIssue,
    registry::Registry,
    traits::Parser,
    types::{CoverageReport, LocaleBundle, LocaleData, Params},
};
