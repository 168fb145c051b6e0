//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellKind`] - Cell variant classification
//! - [`CellError`] - Sentinel error values
//! - [`Cell`] - Raw content, variant and evaluation state of one grid entry

mod address;
mod kind;
mod value;

pub use address::CellAddress;
pub use kind::{is_number, CellKind};
pub use value::{Cell, CellError, CellState};
