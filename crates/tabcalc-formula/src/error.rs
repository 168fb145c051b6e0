//! Formula error types

use tabcalc_core::{CellAddress, CellError};
use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Why a cell failed to evaluate
///
/// Each cause maps to exactly one sentinel through
/// [`FormulaError::sentinel`]; the sentinel is what the cell stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// Text cell without the leading `'` marker
    #[error("Text is missing its leading ' marker")]
    MissingTextMarker,

    /// Operand that is neither a number nor a usable reference
    #[error("Non-numeric operand: {0}")]
    NonNumericOperand(String),

    /// Reference outside the grid or otherwise unusable
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// Reference to a text cell
    #[error("Reference to text cell {0}")]
    TextReference(CellAddress),

    /// Reference chain revisits a cell on the active path
    #[error("Circular reference detected involving cell {0}")]
    CircularReference(CellAddress),

    /// Unmatched opening or closing parenthesis
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,

    /// Operator or formula with nothing to operate on
    #[error("Missing operand")]
    MissingOperand,

    /// Right operand of `/` is zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Integer result or literal out of range
    #[error("Integer overflow")]
    Overflow,

    /// Sentinel already held by a referenced cell
    #[error("{error} propagated from {from}")]
    Propagated { from: CellAddress, error: CellError },
}

impl FormulaError {
    /// The sentinel a cell stores for this failure
    pub fn sentinel(&self) -> CellError {
        match self {
            FormulaError::MissingTextMarker => CellError::Format,
            FormulaError::NonNumericOperand(_)
            | FormulaError::InvalidReference(_)
            | FormulaError::TextReference(_)
            | FormulaError::Overflow => CellError::ExpressionEvaluation,
            FormulaError::CircularReference(_) => CellError::CircularReference,
            FormulaError::UnbalancedParentheses | FormulaError::MissingOperand => {
                CellError::WrongFormulaType
            }
            FormulaError::DivisionByZero => CellError::DivisionByZero,
            FormulaError::Propagated { error, .. } => *error,
        }
    }
}
