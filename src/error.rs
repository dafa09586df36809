//! All error types for the langkey crate.
//!
//! Only caller configuration mistakes and data ingestion failures are errors.
//! Missing locales, missing keys and unmapped codes are answered with
//! sentinel strings or fallbacks instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no default locale configured, call `set_language` first")]
    NoDefaultLocale,

    #[error("unknown locale `{0}`")]
    UnknownLocale(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid params: {0}")]
    InvalidParams(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// Creates a new configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig(message.into())
    }

    /// Creates a new params error
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Error::InvalidParams(message.into())
    }
}
