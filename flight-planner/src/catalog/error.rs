//! Catalog loading errors.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors raised while loading a flight catalog.
///
/// All of these are fatal: a catalog is either loaded completely or not
/// at all, and no search runs against a partially read file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The data file could not be opened
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed CSV
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks a required column
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),

    /// A field could not be parsed
    #[error("line {line}: invalid {field} {value:?}: {reason}")]
    InvalidField {
        line: u64,
        field: &'static str,
        value: String,
        reason: String,
    },

    /// A row parsed but violates a flight invariant
    #[error("line {line}: {source}")]
    InvalidFlight {
        line: u64,
        #[source]
        source: DomainError,
    },
}
