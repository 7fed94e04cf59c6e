//! Error types for deserialization, serialization and typed entry access.

use std::fmt;
use thiserror::Error;

/// Errors raised by the value model, the deserializer, the serializer and the
/// verified accessors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonError {
    /// A container (or the serializer) was handed a value that has no JSON
    /// representation. This is a caller bug, not bad input data.
    #[error("invalid type of JSON entry: {0}")]
    InvalidEntryType(String),

    /// The input text was not valid JSON. `line` and `column` are 1-based and
    /// point at the character where parsing stopped.
    #[error("failed to deserialize JSON on line {line}, column {column}. {message}")]
    Deserialize {
        message: String,
        line: usize,
        column: usize,
    },

    /// A verified lookup found the entry missing, null, or of the wrong type.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Ways a verified lookup can disagree with the document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("{entry} does not exist")]
    Missing { entry: EntryRef },

    #[error("{entry} is null, expected type {expected}")]
    Null {
        entry: EntryRef,
        expected: &'static str,
    },

    #[error("{entry} is of type {found}, expected {expected}")]
    WrongType {
        entry: EntryRef,
        expected: &'static str,
        found: &'static str,
    },

    /// Raised by [`coerce_to_double`](crate::coerce_to_double).
    #[error("expected decimal value, found {found}")]
    NotDecimal { found: &'static str },
}

/// Names the entry a [`SchemaError`] is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRef {
    /// A compound entry.
    Key(String),
    /// A list element, with the list length at the time of the lookup.
    Index { index: usize, len: usize },
}

impl fmt::Display for EntryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryRef::Key(key) => write!(f, "compound entry \"{key}\""),
            EntryRef::Index { index, len } => {
                write!(f, "list entry at index {index} (length {len})")
            }
        }
    }
}

/// Convenience alias used throughout compound-json.
pub type Result<T> = std::result::Result<T, JsonError>;
