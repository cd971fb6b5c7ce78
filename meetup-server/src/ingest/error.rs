//! Data loading error types.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors that make a data set unusable. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Input file does not exist
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Input file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// None of the configured encodings decoded the file cleanly
    #[error("cannot decode {} with any of: {tried}", path.display())]
    Undecodable { path: PathBuf, tried: String },

    /// Encoding label not recognised
    #[error("unknown encoding: {0:?}")]
    UnknownEncoding(String),

    /// CSV syntax or column error
    #[error("{table} table: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    /// Table parsed as CSV but does not have the expected shape
    #[error("{table} table: {message}")]
    Malformed {
        table: &'static str,
        message: String,
    },

    /// A record violated a domain invariant
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl LoadError {
    pub(crate) fn csv(table: &'static str) -> impl FnOnce(csv::Error) -> Self {
        move |source| LoadError::Csv { table, source }
    }

    pub(crate) fn malformed(table: &'static str, message: impl Into<String>) -> Self {
        LoadError::Malformed {
            table,
            message: message.into(),
        }
    }
}
