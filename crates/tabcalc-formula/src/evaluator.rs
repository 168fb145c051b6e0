//! Cell evaluator
//!
//! Evaluates one cell of a [`Spreadsheet`] on demand and memoizes the
//! result in the cell. Literal cells transform their own raw string;
//! formula cells are tokenized, resolved (references only) and computed.

use crate::error::{FormulaError, FormulaResult};
use crate::postfix::evaluate_tokens;
use crate::resolver::Resolver;
use crate::tokenizer::tokenize_expression;
use tabcalc_core::{CellAddress, CellKind, Error, Result, Spreadsheet};

/// Evaluate the cell at `addr` and return its final value.
///
/// Evaluating an already evaluated cell returns the memoized value without
/// doing any work. Per-cell failures are stored as sentinel values; the
/// only `Err` is for an address outside the spreadsheet.
///
/// # Example
/// ```rust
/// use tabcalc_core::{CellAddress, Spreadsheet};
/// use tabcalc_formula::evaluate_cell;
///
/// let mut sheet = Spreadsheet::from_rows(vec![vec!["5", "=A1*2"]]).unwrap();
/// let b1 = CellAddress::parse("B1").unwrap();
/// assert_eq!(evaluate_cell(&mut sheet, b1).unwrap(), "10");
/// ```
pub fn evaluate_cell(sheet: &mut Spreadsheet, addr: CellAddress) -> Result<&str> {
    let pending = {
        let cell = sheet.try_cell(addr)?;
        if cell.is_evaluated() {
            None
        } else {
            Some((cell.kind(), cell.raw().to_string()))
        }
    };

    let (kind, raw) = match pending {
        Some(pending) => pending,
        None => return sheet.try_cell(addr).map(|cell| cell.value()),
    };

    log::trace!("evaluating {} ({}): {:?}", addr, kind, raw);

    let outcome = match kind {
        CellKind::Empty => Ok(String::new()),
        CellKind::Number => Ok(normalize_number(&raw)),
        CellKind::Text => unwrap_text(&raw),
        CellKind::Expression => evaluate_expression(&raw).map(|n| n.to_string()),
        CellKind::Reference => evaluate_reference(sheet, addr, &raw).map(|n| n.to_string()),
    };

    let cell = sheet
        .cell_mut(addr)
        .ok_or_else(|| Error::InvalidAddress(addr.to_string()))?;

    Ok(match outcome {
        Ok(value) => cell.complete(value),
        Err(err) => {
            log::debug!("{}: {}", addr, err);
            cell.fail(err.sentinel())
        }
    })
}

/// Evaluation methods on [`Spreadsheet`]
pub trait CellEvaluation {
    /// Evaluate a cell by address (see [`evaluate_cell`])
    fn evaluate(&mut self, addr: CellAddress) -> Result<&str>;

    /// Evaluate a cell by A1-style name
    fn evaluate_by_name(&mut self, address: &str) -> Result<&str>;
}

impl CellEvaluation for Spreadsheet {
    fn evaluate(&mut self, addr: CellAddress) -> Result<&str> {
        evaluate_cell(self, addr)
    }

    fn evaluate_by_name(&mut self, address: &str) -> Result<&str> {
        let addr = CellAddress::parse(address)?;
        evaluate_cell(self, addr)
    }
}

/// Strip leading `'0'` characters.
///
/// The sign is not stripped, so `-007` stays as is. A number made only of
/// zeros becomes `0`.
pub fn normalize_number(raw: &str) -> String {
    let trimmed = raw.trim_start_matches('0');
    if trimmed.is_empty() && !raw.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Remove the leading `'` text marker
pub fn unwrap_text(raw: &str) -> FormulaResult<String> {
    raw.strip_prefix('\'')
        .map(str::to_string)
        .ok_or(FormulaError::MissingTextMarker)
}

fn evaluate_expression(raw: &str) -> FormulaResult<i64> {
    let body = raw.strip_prefix('=').unwrap_or(raw);
    let tokens = tokenize_expression(body)?;
    evaluate_tokens(&tokens)
}

fn evaluate_reference(sheet: &mut Spreadsheet, addr: CellAddress, raw: &str) -> FormulaResult<i64> {
    let tokens = Resolver::new(sheet).resolve(raw, addr)?;
    evaluate_tokens(&tokens)
}
