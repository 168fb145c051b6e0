//! # tabcalc-formula
//!
//! Formula evaluation for tabcalc.
//!
//! This crate provides:
//! - Formula tokenization (body text → tokens)
//! - Reference resolution with circular reference detection
//! - Operator reduction and integer evaluation
//! - Demand-driven, memoized evaluation of spreadsheet cells
//!
//! ## Example
//!
//! ```rust
//! use tabcalc_core::Spreadsheet;
//! use tabcalc_formula::CellEvaluation;
//!
//! let mut sheet = Spreadsheet::from_rows(vec![vec!["2", "=A1+3*4"]]).unwrap();
//! // No operator precedence: (2+3)*4
//! assert_eq!(sheet.evaluate_by_name("B1").unwrap(), "20");
//! ```

pub mod error;
pub mod evaluator;
pub mod postfix;
mod resolver;
pub mod tokenizer;

pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate_cell, normalize_number, unwrap_text, CellEvaluation};
pub use postfix::{compute, evaluate_tokens, to_postfix};
pub use tokenizer::{tokenize, tokenize_expression, Operator, Token};
