//! Traits for ingesting already-fetched translation data.

use std::io::{BufRead, Cursor, Write};

use crate::error::Error;

/// A trait for reading and writing langkey data as JSON.
///
/// The crate never opens files itself; callers hand over a reader, a string
/// or bytes they obtained however they like.
///
/// # Example
///
/// ```rust
/// use langkey::{LocaleData, traits::Parser};
///
/// let data = LocaleData::from_str(r#"{ "dictionary": { "greeting": "Hello" } }"#)?;
/// assert_eq!(data.dictionary["greeting"], "Hello");
/// assert!(data.languages.is_empty());
/// # Ok::<(), langkey::Error>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Write to any writer.
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }

    /// Parse from bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(bytes))
    }
}

/// Implements [`Parser`] for types whose JSON shape is exactly their serde shape.
macro_rules! impl_json_parser {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::traits::Parser for $ty {
                fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, $crate::error::Error> {
                    serde_json::from_reader(reader).map_err($crate::error::Error::Parse)
                }

                fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), $crate::error::Error> {
                    serde_json::to_writer(&mut writer, self).map_err($crate::error::Error::Parse)
                }
            }
        )+
    };
}

pub(crate) use impl_json_parser;
