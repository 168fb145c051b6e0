//! Prelude module - common imports for tabcalc users
//!
//! ```rust
//! use tabcalc::prelude::*;
//! ```

pub use crate::{
    // Calculation types
    CalculationStats,
    // Cell types
    Cell,
    CellAddress,
    // Extension traits
    CellEvaluation,
    CellError,
    CellKind,
    // Error types
    Error,
    Result,
    // Main types
    Spreadsheet,
    SpreadsheetCalculationExt,
    SpreadsheetExt,
    // I/O types
    TsvError,
    TsvReadOptions,
    TsvReader,
    TsvWriteOptions,
    TsvWriter,
};
