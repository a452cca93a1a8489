use std::io;
use thiserror::Error;

/// Error type for bucket-table.
#[derive(Error, Debug)]
pub enum TableError {
    /// A table needs at least one bucket to hash into.
    #[error("Invalid bucket count `{0}`: a table needs at least one bucket")]
    InvalidBucketCount(usize),
    /// A line of the command language could not be parsed.
    #[error("Invalid command on line {line}: `{text}`")]
    InvalidCommand {
        /// 1-based line number within the script.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },
    /// IO error.
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Result type for bucket-table.
pub type Result<T> = std::result::Result<T, TableError>;
