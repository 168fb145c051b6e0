//! Cross-cell reference resolution
//!
//! Rewrites every reference operand of a formula into the referenced
//! cell's value, evaluating targets on demand. Reference targets are
//! resolved inline while their address sits on the active path; meeting an
//! address already on the path is a circular reference.
//!
//! Nested reference cells are walked with an explicit stack of frames, so
//! chain length is bounded by the grid, not by the native stack.

use std::collections::HashSet;

use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::evaluate_cell;
use crate::tokenizer::{tokenize, Token};
use tabcalc_core::cell::is_number;
use tabcalc_core::{CellAddress, CellError, CellKind, Spreadsheet};

/// What a single reference operand turns into
enum Substitution {
    /// One operand value
    Value(String),
    /// Body of a reference cell, to be resolved in its own frame
    Descend(String),
}

/// One formula body being resolved
struct Frame {
    addr: CellAddress,
    /// Tokens still to process, last token first
    pending: Vec<Token>,
    resolved: Vec<Token>,
}

impl Frame {
    fn open(addr: CellAddress, body: &str) -> FormulaResult<Self> {
        if is_number(body) {
            return Ok(Self {
                addr,
                pending: Vec::new(),
                resolved: vec![Token::operand(body)],
            });
        }
        if let Some(error) = CellError::from_str(body) {
            return Err(FormulaError::Propagated { from: addr, error });
        }

        let body = body.strip_prefix('=').unwrap_or(body).to_ascii_uppercase();
        let mut pending = tokenize(&body);
        pending.reverse();

        Ok(Self {
            addr,
            pending,
            resolved: Vec::new(),
        })
    }
}

/// Resolves references for one top-level evaluation.
///
/// The active path lives only as long as one `resolve` call, so it is gone
/// on every exit, successful or not.
pub(crate) struct Resolver<'s> {
    sheet: &'s mut Spreadsheet,
}

impl<'s> Resolver<'s> {
    pub(crate) fn new(sheet: &'s mut Spreadsheet) -> Self {
        Self { sheet }
    }

    /// Resolve the formula body (with or without its leading `=`) of the
    /// cell at `origin` into number, operator and parenthesis tokens.
    ///
    /// The finished tokens of a nested reference cell replace everything
    /// resolved so far in the frame that referenced it, not just the
    /// reference operand.
    pub(crate) fn resolve(&mut self, body: &str, origin: CellAddress) -> FormulaResult<Vec<Token>> {
        let mut frames = vec![Frame::open(origin, body)?];
        let mut path: HashSet<CellAddress> = HashSet::from([origin]);

        while let Some(frame) = frames.last_mut() {
            let operand = match frame.pending.pop() {
                Some(Token::Operand(operand)) => operand,
                Some(other) => {
                    frame.resolved.push(other);
                    continue;
                }
                None => {
                    let finished = std::mem::take(&mut frame.resolved);
                    path.remove(&frame.addr);
                    frames.pop();
                    match frames.last_mut() {
                        Some(parent) => parent.resolved = finished,
                        None => return Ok(finished),
                    }
                    continue;
                }
            };

            if is_number(&operand) {
                frame.resolved.push(Token::Operand(operand));
                continue;
            }

            let target = CellAddress::parse_reference(&operand)
                .ok_or_else(|| FormulaError::NonNumericOperand(operand.clone()))?;

            match self.substitute(target)? {
                Substitution::Value(value) => frame.resolved.push(Token::Operand(value)),
                Substitution::Descend(body) => {
                    if !path.insert(target) {
                        log::trace!("{} is already being resolved", target);
                        return Err(FormulaError::CircularReference(target));
                    }
                    frames.push(Frame::open(target, &body)?);
                }
            }
        }

        Ok(Vec::new())
    }

    fn substitute(&mut self, target: CellAddress) -> FormulaResult<Substitution> {
        let cell = self
            .sheet
            .try_cell(target)
            .map_err(|e| FormulaError::InvalidReference(e.to_string()))?;

        if let Some(error) = cell.error() {
            return Err(FormulaError::Propagated {
                from: target,
                error,
            });
        }

        let kind = cell.kind();
        if kind == CellKind::Reference {
            return Ok(Substitution::Descend(cell.value().to_string()));
        }

        let value = evaluate_cell(self.sheet, target)
            .map_err(|e| FormulaError::InvalidReference(e.to_string()))?
            .to_string();

        if let Some(error) = CellError::from_str(&value) {
            return Err(FormulaError::Propagated {
                from: target,
                error,
            });
        }

        match kind {
            CellKind::Empty => Ok(Substitution::Value("0".to_string())),
            CellKind::Text => Err(FormulaError::TextReference(target)),
            CellKind::Number if !value.chars().any(|c| c.is_ascii_digit()) => {
                Err(FormulaError::NonNumericOperand(value))
            }
            _ => Ok(Substitution::Value(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::CellEvaluation;
    use pretty_assertions::assert_eq;

    fn sheet(rows: Vec<Vec<&str>>) -> Spreadsheet {
        Spreadsheet::from_rows(rows).unwrap()
    }

    fn eval(sheet: &mut Spreadsheet, name: &str) -> String {
        sheet.evaluate_by_name(name).unwrap().to_string()
    }

    #[test]
    fn test_reference_chain() {
        let mut s = sheet(vec![vec!["5", "=A1"]]);
        assert_eq!(eval(&mut s, "B1"), "5");
    }

    #[test]
    fn test_reference_is_case_insensitive() {
        let mut s = sheet(vec![vec!["5", "=a1*2"]]);
        assert_eq!(eval(&mut s, "B1"), "10");
    }

    #[test]
    fn test_reference_arithmetic() {
        let mut s = sheet(vec![
            vec!["4", "=A1+A2", "=(A1+A2)*A3"],
            vec!["6", "=A2/A1", "=B1-B2"],
            vec!["2", "", ""],
        ]);
        assert_eq!(eval(&mut s, "B1"), "10");
        assert_eq!(eval(&mut s, "B2"), "1");
        assert_eq!(eval(&mut s, "C1"), "20");
    }

    #[test]
    fn test_reference_to_expression_forces_evaluation() {
        let mut s = sheet(vec![vec!["=2*3", "=A1+1"]]);
        assert_eq!(eval(&mut s, "B1"), "7");
        assert!(s.cell_by_name("A1").unwrap().is_evaluated());
    }

    #[test]
    fn test_reference_to_empty_is_zero() {
        let mut s = sheet(vec![vec!["", "=A1+3"]]);
        assert_eq!(eval(&mut s, "B1"), "3");
    }

    #[test]
    fn test_reference_to_normalized_number() {
        let mut s = sheet(vec![vec!["007", "=A1*2", "-", "=C1+1"]]);
        assert_eq!(eval(&mut s, "B1"), "14");
        assert_eq!(eval(&mut s, "D1"), CellError::ExpressionEvaluation.as_str());
    }

    #[test]
    fn test_reference_out_of_range() {
        let mut s = sheet(vec![vec!["1", "=A5"], vec!["2", "=Z1"]]);
        assert_eq!(eval(&mut s, "B1"), CellError::ExpressionEvaluation.as_str());
        assert_eq!(eval(&mut s, "B2"), CellError::ExpressionEvaluation.as_str());
    }

    #[test]
    fn test_reference_to_text() {
        let mut s = sheet(vec![vec!["'x", "=A1+1"]]);
        assert_eq!(eval(&mut s, "B1"), CellError::ExpressionEvaluation.as_str());
    }

    #[test]
    fn test_reference_to_malformed_text_propagates_format_error() {
        let mut s = sheet(vec![vec!["x", "=A1+1"]]);
        assert_eq!(eval(&mut s, "B1"), CellError::Format.as_str());
    }

    #[test]
    fn test_unrecognized_operand() {
        let mut s = sheet(vec![vec!["=hello", "=A1+1.5", "=AB1"]]);
        assert_eq!(eval(&mut s, "A1"), CellError::ExpressionEvaluation.as_str());
        assert_eq!(eval(&mut s, "B1"), CellError::ExpressionEvaluation.as_str());
        assert_eq!(eval(&mut s, "C1"), CellError::ExpressionEvaluation.as_str());
    }

    #[test]
    fn test_cycle_detection() {
        let mut s = sheet(vec![vec!["=B1", "=A1"]]);
        assert_eq!(eval(&mut s, "A1"), CellError::CircularReference.as_str());
        assert_eq!(eval(&mut s, "B1"), CellError::CircularReference.as_str());
    }

    #[test]
    fn test_self_reference() {
        let mut s = sheet(vec![vec!["=A1+1"]]);
        assert_eq!(eval(&mut s, "A1"), CellError::CircularReference.as_str());
    }

    #[test]
    fn test_longer_cycle() {
        let mut s = sheet(vec![vec!["=B1", "=C1", "=A1", "=A1+1"]]);
        assert_eq!(eval(&mut s, "D1"), CellError::CircularReference.as_str());
        assert_eq!(eval(&mut s, "A1"), CellError::CircularReference.as_str());
    }

    #[test]
    fn test_errors_propagate_through_references() {
        let mut s = sheet(vec![
            vec!["=(1", "=A1", "=B1+1"],
            vec!["=1/0", "=A2+1", "=B2"],
        ]);
        assert_eq!(eval(&mut s, "C1"), CellError::WrongFormulaType.as_str());
        assert_eq!(eval(&mut s, "B2"), CellError::DivisionByZero.as_str());
        assert_eq!(eval(&mut s, "C2"), CellError::DivisionByZero.as_str());
        // Propagated although it is not a canonical sentinel
        assert!(!CellError::is_canonical_str(&eval(&mut s, "C2")));
        assert!(CellError::is_canonical_str(&eval(&mut s, "C1")));
    }

    #[test]
    fn test_evaluated_reference_target_is_reused() {
        let mut s = sheet(vec![vec!["3", "=A1*2", "=B1+1"]]);
        assert_eq!(eval(&mut s, "B1"), "6");
        assert_eq!(eval(&mut s, "C1"), "7");
    }

    #[test]
    fn test_repeated_target_is_not_a_cycle() {
        let mut s = sheet(vec![vec!["2", "=A1", "=B1*B1"]]);
        // B1 leaves the active path after its first resolution. The second
        // resolution then replaces `2 *`, leaving just its own tokens.
        assert_eq!(eval(&mut s, "C1"), "2");
    }

    /// A resolved reference-cell target replaces the tokens collected before
    /// it instead of being inserted in place.
    #[test]
    fn test_reference_target_replaces_preceding_tokens() {
        let mut s = sheet(vec![vec!["5", "=A1", "=1+B1", "=B1+1"]]);
        assert_eq!(eval(&mut s, "C1"), "5");
        assert_eq!(eval(&mut s, "D1"), "6");
    }

    #[test]
    fn test_long_reference_chain() {
        // Every cell of a full 26 x 999 grid references the next one,
        // column by column; the last cell holds the number.
        const ROWS: usize = 999;
        const COLS: usize = 26;
        let mut rows = vec![vec![String::new(); COLS]; ROWS];
        for col in 0..COLS {
            for row in 0..ROWS {
                let next = if row + 1 < ROWS {
                    CellAddress::new(col as u8, (row + 1) as u32)
                } else {
                    CellAddress::new(col as u8 + 1, 0)
                };
                rows[row][col] = format!("={}", next);
            }
        }
        rows[ROWS - 1][COLS - 1] = "1".to_string();

        let mut s = Spreadsheet::from_rows(rows).unwrap();
        assert_eq!(eval(&mut s, "A1"), "1");
        assert_eq!(eval(&mut s, "Z998"), "1");
    }

    #[test]
    fn test_long_cycle_is_detected() {
        const ROWS: usize = 999;
        let mut rows: Vec<Vec<String>> = (0..ROWS)
            .map(|row| vec![format!("=A{}", row + 2)])
            .collect();
        rows[ROWS - 1][0] = "=A1".to_string();

        let mut s = Spreadsheet::from_rows(rows).unwrap();
        assert_eq!(eval(&mut s, "A500"), CellError::CircularReference.as_str());
    }

    #[test]
    fn test_first_error_wins() {
        let mut s = sheet(vec![vec!["=B1", "=A1", "=A1+Z9"]]);
        assert_eq!(eval(&mut s, "C1"), CellError::CircularReference.as_str());
    }
}
