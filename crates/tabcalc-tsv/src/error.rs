//! TSV error types

use thiserror::Error;

/// Result type for TSV operations
pub type TsvResult<T> = std::result::Result<T, TsvError>;

/// Errors that can occur during TSV operations
#[derive(Debug, Error)]
pub enum TsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing or malformed `rows<TAB>columns` header
    #[error("Invalid header: {0}")]
    Header(String),

    /// Grid shape disagrees with the header
    #[error("Line {line}: expected {expected} {what}, found {actual}")]
    DimensionMismatch {
        line: usize,
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] tabcalc_core::Error),
}
