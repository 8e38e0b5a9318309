//! Error types for record ingestion, lookup, and file I/O.
//!
//! Row-level failures ([`RowError`], [`FieldListError`]) are recovered by the
//! ingestion loop: the row is dropped and ingestion continues. Lookup
//! failures keep "not found" apart from "invalid date". Only file I/O
//! ([`ProcessError`]) is fatal for the operation that requested it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A braced integer list could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldListError {
    #[error("invalid integer token '{token}' at position {position}")]
    InvalidToken { token: String, position: usize },
}

/// Which list-valued field of a row failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Class,
    Subject,
}

impl std::fmt::Display for ListField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListField::Class => write!(f, "id_classe"),
            ListField::Subject => write!(f, "id_assunto"),
        }
    }
}

/// A raw line could not be turned into a [`Record`](crate::Record).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// No template captured all six fields.
    #[error("row matched only {fields_matched} of 6 fields")]
    Partial { fields_matched: usize },
    #[error("field {field}: {source}")]
    FieldList {
        field: ListField,
        #[source]
        source: FieldListError,
    },
}

/// `days_since` could not produce an elapsed day count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("process {id} not found")]
    NotFound { id: i64 },
    #[error("process {id} has an invalid filing date '{raw}'")]
    InvalidDate { id: i64, raw: String },
}

/// File-level failure while loading or exporting records.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
