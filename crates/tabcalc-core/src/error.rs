//! Error types for tabcalc-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Structural errors raised while building or addressing a spreadsheet.
///
/// Per-cell evaluation failures are not errors in this sense; they are
/// sentinel values (see [`CellError`](crate::CellError)).
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Raw cell content that fits none of the cell variants
    #[error("Unknown cell format at {address}: {raw:?}")]
    UnknownFormat { address: String, raw: String },

    /// More columns than single-letter column names allow
    #[error("Too many columns: {0} (max: {max})", max = crate::MAX_COLUMNS)]
    TooManyColumns(usize),

    /// A row with a different number of fields than the first row
    #[error("Row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Row index out of bounds
    #[error("Row {0} out of bounds (rows: {1})")]
    RowOutOfBounds(u32, usize),

    /// Column not present in the spreadsheet
    #[error("Column not found: {0}")]
    ColumnNotFound(char),
}
