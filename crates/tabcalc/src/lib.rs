//! # tabcalc
//!
//! A Rust library for evaluating spreadsheet grids.
//!
//! A grid holds raw cell strings: `'`-prefixed text, integers, arithmetic
//! formulas (`=1+2`) and formulas referencing other cells (`=A1*2`).
//! Evaluation is demand-driven and memoized per cell; failures are stored
//! in the cell as sentinel values such as `#CIRCULAR_REF`.
//!
//! ## Features
//!
//! - Cell classification into five variants
//! - Integer arithmetic with parentheses, evaluated left to right
//! - Cross-cell references with circular reference detection
//! - Tab-delimited grid reading and writing
//!
//! ## Example
//!
//! ```rust
//! use tabcalc::prelude::*;
//!
//! let input = "2\t2\n5\t=A1+1\n'x\t=A1/0\n";
//! let mut sheet = TsvReader::read(input.as_bytes(), &TsvReadOptions::default()).unwrap();
//!
//! let stats = sheet.calculate();
//! assert_eq!(stats.cells_calculated, 4);
//! assert_eq!(sheet.cell_by_name("B1").unwrap().value(), "6");
//! assert_eq!(sheet.cell_by_name("B2").unwrap().value(), "#ERROR_NUM");
//! ```

pub mod calculation;
pub mod prelude;

// Re-export calculation types
pub use calculation::{CalculationStats, SpreadsheetCalculationExt};

// Re-export core types
pub use tabcalc_core::{
    Cell, CellAddress, CellError, CellKind, CellState, Error, Result, Spreadsheet, MAX_COLUMNS,
};

// Re-export formula types
pub use tabcalc_formula::{evaluate_cell, CellEvaluation, FormulaError, FormulaResult};

// Re-export I/O types
pub use tabcalc_tsv::{
    LineTerminator, TsvError, TsvReadOptions, TsvReader, TsvResult, TsvWriteOptions, TsvWriter,
};

use std::path::Path;

/// Extension trait for Spreadsheet to add file I/O
pub trait SpreadsheetExt: Sized {
    /// Open a grid file with default options
    fn open<P: AsRef<Path>>(path: P) -> TsvResult<Self>;

    /// Save current values to a grid file in the labelled layout
    fn save<P: AsRef<Path>>(&self, path: P) -> TsvResult<()>;
}

impl SpreadsheetExt for Spreadsheet {
    fn open<P: AsRef<Path>>(path: P) -> TsvResult<Spreadsheet> {
        TsvReader::read_file(path, &TsvReadOptions::default())
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> TsvResult<()> {
        TsvWriter::write_file(self, path, &TsvWriteOptions::default())
    }
}
