//! Error types for the lexport library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lexport operations.
///
/// The parsing and mapping pipeline itself is fail-soft and never returns
/// an error; these variants cover file access and configuration parsing.
#[derive(Debug, Error)]
pub enum LexportError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A column role specification could not be parsed.
    #[error("Invalid column role: {0}")]
    InvalidRole(String),

    /// A delimiter specification was not a single character.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for lexport operations.
pub type Result<T> = std::result::Result<T, LexportError>;
