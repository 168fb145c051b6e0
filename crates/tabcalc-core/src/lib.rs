//! # tabcalc-core
//!
//! Core data structures for the tabcalc spreadsheet evaluator.
//!
//! This crate provides the fundamental types used throughout tabcalc:
//! - [`CellAddress`] - A cell's position (e.g., "B3")
//! - [`CellKind`] - The five cell variants and the classifier that picks one
//! - [`CellError`] - Sentinel error values stored in place of a result
//! - [`Cell`] and [`Spreadsheet`] - The grid and its cells
//!
//! ## Example
//!
//! ```rust
//! use tabcalc_core::{CellAddress, CellKind, Spreadsheet};
//!
//! let sheet = Spreadsheet::from_rows(vec![
//!     vec!["5", "=A1+1"],
//!     vec!["'x", ""],
//! ])
//! .unwrap();
//!
//! let b1 = CellAddress::parse("B1").unwrap();
//! assert_eq!(sheet.cell(b1).unwrap().kind(), CellKind::Reference);
//! ```

pub mod cell;
pub mod error;
pub mod spreadsheet;

// Re-exports for convenience
pub use cell::{Cell, CellAddress, CellError, CellKind, CellState};
pub use error::{Error, Result};
pub use spreadsheet::Spreadsheet;

/// Maximum number of columns (columns are named by a single letter)
pub const MAX_COLUMNS: usize = 26;
