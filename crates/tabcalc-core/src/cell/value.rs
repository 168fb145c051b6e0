//! Cell values, sentinel errors and evaluation state

use super::{CellAddress, CellKind};
use crate::error::{Error, Result};
use std::fmt;

/// Sentinel error values stored in place of a cell's result
///
/// Once assigned, a sentinel is the cell's final value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellError {
    /// #UNKNOWN_FORMAT - Text without the leading `'` marker
    Format,
    /// #TEXT? - Non-numeric operand or invalid reference
    ExpressionEvaluation,
    /// #CIRCULAR_REF - Reference chain revisits a cell
    CircularReference,
    /// #WRONG_FORMULA_TYPE - Unbalanced parentheses or missing operand
    WrongFormulaType,
    /// #ERROR_NUM - Division by zero
    DivisionByZero,
}

impl CellError {
    /// The four sentinels recognized by [`CellError::is_canonical`]
    pub const CANONICAL: [CellError; 4] = [
        CellError::Format,
        CellError::ExpressionEvaluation,
        CellError::CircularReference,
        CellError::WrongFormulaType,
    ];

    /// Get the display string for this error
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::Format => "#UNKNOWN_FORMAT",
            CellError::ExpressionEvaluation => "#TEXT?",
            CellError::CircularReference => "#CIRCULAR_REF",
            CellError::WrongFormulaType => "#WRONG_FORMULA_TYPE",
            CellError::DivisionByZero => "#ERROR_NUM",
        }
    }

    /// Parse a sentinel string (exact match)
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "#UNKNOWN_FORMAT" => Some(CellError::Format),
            "#TEXT?" => Some(CellError::ExpressionEvaluation),
            "#CIRCULAR_REF" => Some(CellError::CircularReference),
            "#WRONG_FORMULA_TYPE" => Some(CellError::WrongFormulaType),
            "#ERROR_NUM" => Some(CellError::DivisionByZero),
            _ => None,
        }
    }

    /// Whether this is one of the four canonical sentinels.
    ///
    /// Division by zero is not canonical.
    pub fn is_canonical(&self) -> bool {
        !matches!(self, CellError::DivisionByZero)
    }

    /// Check whether a value string is one of the four canonical sentinels.
    ///
    /// This is the membership test for callers inspecting final values.
    /// Evaluation itself propagates every sentinel through references,
    /// `#ERROR_NUM` included, so it matches with [`CellError::from_str`].
    pub fn is_canonical_str(s: &str) -> bool {
        CellError::from_str(s).map_or(false, |e| e.is_canonical())
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Evaluation lifecycle of a cell
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellState {
    /// Not evaluated yet; the cell's value is its raw content
    #[default]
    Unevaluated,
    /// Evaluated; holds the final value (possibly a sentinel)
    Evaluated(String),
}

/// One grid entry: raw content, its variant and its evaluation state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    address: CellAddress,
    kind: CellKind,
    raw: String,
    state: CellState,
}

impl Cell {
    /// Classify `raw` and build an unevaluated cell.
    ///
    /// Fails with [`Error::UnknownFormat`] when the content fits no variant.
    pub fn new<S: Into<String>>(address: CellAddress, raw: S) -> Result<Self> {
        let raw = raw.into();
        let kind = CellKind::classify(&raw).ok_or_else(|| Error::UnknownFormat {
            address: address.to_string(),
            raw: raw.clone(),
        })?;
        Ok(Self {
            address,
            kind,
            raw,
            state: CellState::Unevaluated,
        })
    }

    pub fn address(&self) -> CellAddress {
        self.address
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Raw input string
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn state(&self) -> &CellState {
        &self.state
    }

    pub fn is_evaluated(&self) -> bool {
        matches!(self.state, CellState::Evaluated(_))
    }

    /// Current value: the final value once evaluated, the raw content before
    pub fn value(&self) -> &str {
        match &self.state {
            CellState::Evaluated(value) => value,
            CellState::Unevaluated => &self.raw,
        }
    }

    /// The sentinel held by this cell, if it evaluated to one
    pub fn error(&self) -> Option<CellError> {
        match &self.state {
            CellState::Evaluated(value) => CellError::from_str(value),
            CellState::Unevaluated => None,
        }
    }

    /// Record the final value and return it.
    ///
    /// Only the first call has an effect; a finished cell keeps its value.
    pub fn complete(&mut self, value: String) -> &str {
        if let CellState::Unevaluated = self.state {
            self.state = CellState::Evaluated(value);
        }
        self.value()
    }

    /// Record a sentinel as the final value
    pub fn fail(&mut self, error: CellError) -> &str {
        self.complete(error.as_str().to_string())
    }
}
