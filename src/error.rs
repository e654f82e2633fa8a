//! Error types for instant-sql-vars

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised around the declaration transform (file I/O and editor ranges).
///
/// The transform itself is total over its input; only the surfaces that touch
/// the filesystem or address text by range can fail.
#[derive(Error, Debug)]
pub enum InstantSqlVarsError {
    #[error("Failed to read SQL file: {path}")]
    SqlFileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output to {path}")]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid selection {start}..{end} for a document of {len} bytes")]
    InvalidSelection { start: usize, end: usize, len: usize },

    #[error("Invalid line range: {message}")]
    InvalidLineRange { message: String },
}
