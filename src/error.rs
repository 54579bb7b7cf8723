//! Error types for parsing and resource loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while ranking or parsing a sentence.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A matrix was combined with a matrix or sentence of a different size.
    /// This is a programmer error and is never silently truncated.
    #[error("dimension mismatch: expected {expected}x{expected}, got {found}x{found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Imported matrix data was not square.
    #[error("adjacency matrix is not square: {rows} rows, but row {row} has {cols} columns")]
    NotSquare { rows: usize, row: usize, cols: usize },

    /// Imported matrix data contained a negative weight.
    #[error("negative weight {weight} at ({row}, {col})")]
    NegativeWeight { row: usize, col: usize, weight: f64 },

    /// A distributional-thesaurus lookup failed during graph construction.
    /// Surfaced rather than treated as "not similar", since silently
    /// skipping the removal rule would change parse output undetectably.
    #[error(transparent)]
    Thesaurus(#[from] ThesaurusError),
}

/// Errors raised while loading lexical resources.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed line {line} in {path}: {message}")]
    Malformed {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// The thesaurus could not be connected at startup.
    #[error(transparent)]
    Thesaurus(#[from] ThesaurusError),
}

/// Errors from the distributional-thesaurus collaborator.
#[derive(Debug, Error)]
pub enum ThesaurusError {
    #[error("thesaurus connection failed: {0}")]
    Connection(String),

    #[error("similarity lookup failed for term {term:?}: {message}")]
    Lookup { term: String, message: String },
}
