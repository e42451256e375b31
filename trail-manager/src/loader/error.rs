//! Loader error types.

use std::path::PathBuf;

/// Errors that can occur while reading record files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File has no header row
    #[error("missing header row")]
    MissingHeader,

    /// Header lacks a required column
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),

    /// Row has fewer fields than the header
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Landmark id field is not a valid id
    #[error("line {line}: {source}")]
    InvalidId {
        line: usize,
        #[source]
        source: crate::domain::InvalidLandmarkId,
    },

    /// Trail length is not a non-negative integer
    #[error("line {line}: invalid trail length `{value}`")]
    InvalidLength { line: usize, value: String },
}
