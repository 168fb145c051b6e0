//! Spreadsheet calculation driver
//!
//! Evaluates every cell of a spreadsheet, column by column starting at `A`
//! and top to bottom within a column, and summarizes the outcome.
//!
//! # Example
//!
//! ```rust
//! use tabcalc::prelude::*;
//!
//! let mut sheet = Spreadsheet::from_rows(vec![
//!     vec!["=B1", "=A1"],
//!     vec!["10", "=A2/0"],
//! ])
//! .unwrap();
//!
//! let stats = sheet.calculate();
//! assert_eq!(stats.formula_count, 3);
//! assert_eq!(stats.circular_references, 2);
//! assert_eq!(stats.division_by_zero, 1);
//! assert_eq!(stats.errors, 3);
//! ```

use crate::{CellError, CellEvaluation, Spreadsheet};

/// Statistics from a calculation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationStats {
    /// Number of cells evaluated by this run
    pub cells_calculated: usize,
    /// Total number of formula (expression or reference) cells
    pub formula_count: usize,
    /// Number of cells holding a sentinel error value
    pub errors: usize,
    /// Number of cells holding the circular reference sentinel
    pub circular_references: usize,
    /// Number of cells holding the division by zero sentinel
    pub division_by_zero: usize,
}

/// Extension trait for Spreadsheet to add calculation methods
pub trait SpreadsheetCalculationExt {
    /// Evaluate every cell and return statistics about the result.
    ///
    /// Cells evaluated by an earlier call keep their values.
    fn calculate(&mut self) -> CalculationStats;
}

impl SpreadsheetCalculationExt for Spreadsheet {
    fn calculate(&mut self) -> CalculationStats {
        let mut stats = CalculationStats {
            cells_calculated: self.cells().filter(|cell| !cell.is_evaluated()).count(),
            ..Default::default()
        };

        for addr in self.addresses() {
            if let Err(e) = self.evaluate(addr) {
                log::warn!("skipping {}: {}", addr, e);
            }
        }

        for cell in self.cells() {
            if cell.kind().is_formula() {
                stats.formula_count += 1;
            }
            match cell.error() {
                Some(CellError::CircularReference) => stats.circular_references += 1,
                Some(CellError::DivisionByZero) => stats.division_by_zero += 1,
                _ => {}
            }
            if cell.error().is_some() {
                stats.errors += 1;
            }
        }

        log::debug!(
            "calculated {} cells ({} formulas, {} errors)",
            stats.cells_calculated,
            stats.formula_count,
            stats.errors
        );

        stats
    }
}
