use thiserror::Error;

use crate::column::ColumnType;
use crate::merge::ImperfectMergeError;

/// Error type definitions
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    ImperfectMerge(#[from] ImperfectMergeError),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Duplicate column name: {0}")]
    DuplicateColumnName(String),

    #[error("Inconsistent row count: expected {expected}, found {found}")]
    InconsistentRowCount { expected: usize, found: usize },

    #[error("Column type mismatch: column {name}, expected {expected:?}, found {found:?}")]
    ColumnTypeMismatch {
        name: String,
        expected: ColumnType,
        found: ColumnType,
    },

    #[error("Index out of bounds: index {index}, size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("IO error")]
    Io(#[source] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl Error {
    /// Returns the merge validation failure, if this is one
    pub fn as_imperfect_merge(&self) -> Option<&ImperfectMergeError> {
        match self {
            Error::ImperfectMerge(err) => Some(err),
            _ => None,
        }
    }
}
