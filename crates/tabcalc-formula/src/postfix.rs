//! Operator reduction and integer evaluation
//!
//! Tokens are reordered with a single operator stack, then computed with a
//! value stack. All four operators share one precedence level: an incoming
//! operator always flushes the operators already stacked, so `2+3*4` is
//! `(2+3)*4`. Existing grids depend on this ordering.

use crate::error::{FormulaError, FormulaResult};
use crate::tokenizer::{Operator, Token};
use tabcalc_core::cell::is_number;

/// Reorder infix tokens into evaluation (postfix) order.
///
/// Fails with [`FormulaError::UnbalancedParentheses`] on a `)` without a
/// matching `(` or a `(` that is never closed.
pub fn to_postfix(tokens: &[Token]) -> FormulaResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Operand(_) => output.push(token.clone()),
            Token::Operator(_) => {
                while let Some(top) = stack.pop() {
                    if top.is_operator() {
                        output.push(top);
                    } else {
                        stack.push(top);
                        break;
                    }
                }
                stack.push(token.clone());
            }
            Token::LeftParen => stack.push(Token::LeftParen),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(Token::LeftParen) => break,
                    Some(top) => output.push(top),
                    None => return Err(FormulaError::UnbalancedParentheses),
                }
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top.is_paren() {
            return Err(FormulaError::UnbalancedParentheses);
        }
        output.push(top);
    }

    Ok(output)
}

/// Compute a postfix token sequence.
///
/// An operator that finds only one value is unary: `-` negates it and any
/// other operator returns it unchanged. The result is the value left on
/// top of the stack.
pub fn compute(postfix: &[Token]) -> FormulaResult<i64> {
    let mut values: Vec<i64> = Vec::new();

    for token in postfix {
        match token {
            Token::Operand(text) => values.push(parse_operand(text)?),
            Token::Operator(op) => {
                let right = values.pop().ok_or(FormulaError::MissingOperand)?;
                let result = match values.pop() {
                    Some(left) => apply(*op, left, right)?,
                    None if *op == Operator::Subtract => {
                        right.checked_neg().ok_or(FormulaError::Overflow)?
                    }
                    None => right,
                };
                values.push(result);
            }
            Token::LeftParen | Token::RightParen => {
                return Err(FormulaError::UnbalancedParentheses)
            }
        }
    }

    values.last().copied().ok_or(FormulaError::MissingOperand)
}

/// Reduce and compute infix tokens in one step
pub fn evaluate_tokens(tokens: &[Token]) -> FormulaResult<i64> {
    let postfix = to_postfix(tokens)?;
    compute(&postfix)
}

fn apply(op: Operator, left: i64, right: i64) -> FormulaResult<i64> {
    let result = match op {
        Operator::Add => left.checked_add(right),
        Operator::Subtract => left.checked_sub(right),
        Operator::Multiply => left.checked_mul(right),
        Operator::Divide => {
            if right == 0 {
                return Err(FormulaError::DivisionByZero);
            }
            // Truncates toward zero
            left.checked_div(right)
        }
    };
    result.ok_or(FormulaError::Overflow)
}

fn parse_operand(text: &str) -> FormulaResult<i64> {
    text.parse().map_err(|_| {
        if is_number(text) && text.chars().any(|c| c.is_ascii_digit()) {
            FormulaError::Overflow
        } else {
            FormulaError::NonNumericOperand(text.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;
    use pretty_assertions::assert_eq;

    fn eval(body: &str) -> FormulaResult<i64> {
        evaluate_tokens(&tokenize(body))
    }

    fn render(tokens: &[Token]) -> String {
        tokens
            .iter()
            .map(Token::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_postfix_order() {
        let postfix = to_postfix(&tokenize("1+2*3")).unwrap();
        assert_eq!(render(&postfix), "1 2 + 3 *");

        let postfix = to_postfix(&tokenize("1+(2*3)")).unwrap();
        assert_eq!(render(&postfix), "1 2 3 * +");
    }

    /// Operators are evaluated strictly left to right with no precedence.
    /// Do not "fix" this: stored grids rely on it.
    #[test]
    fn test_no_operator_precedence_is_preserved() {
        assert_eq!(eval("2+3*4"), Ok(20));
        assert_eq!(eval("10-4/2"), Ok(3));
        assert_eq!(eval("2+(3*4)"), Ok(14));
    }

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(eval("1+2"), Ok(3));
        assert_eq!(eval("7-10"), Ok(-3));
        assert_eq!(eval("6*7"), Ok(42));
        assert_eq!(eval("((8))"), Ok(8));
        assert_eq!(eval("007+1"), Ok(8));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(eval("7/2"), Ok(3));
        assert_eq!(eval("0-7/2"), Ok(-3));
        assert_eq!(eval("(0-7)/2"), Ok(-3));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval("5/0"), Err(FormulaError::DivisionByZero));
        assert_eq!(eval("5/(1-1)"), Err(FormulaError::DivisionByZero));
    }

    #[test]
    fn test_unary_operators() {
        assert_eq!(eval("-5"), Ok(-5));
        assert_eq!(eval("*5"), Ok(5));
        assert_eq!(eval("+5"), Ok(5));
        assert_eq!(eval("-(2+3)"), Ok(-5));
    }

    #[test]
    fn test_unbalanced_parentheses() {
        assert_eq!(eval("(1+2"), Err(FormulaError::UnbalancedParentheses));
        assert_eq!(eval("1+2)"), Err(FormulaError::UnbalancedParentheses));
        assert_eq!(eval(")("), Err(FormulaError::UnbalancedParentheses));
    }

    #[test]
    fn test_missing_operands() {
        assert_eq!(eval(""), Err(FormulaError::MissingOperand));
        assert_eq!(eval("()"), Err(FormulaError::MissingOperand));
        assert_eq!(eval("+"), Err(FormulaError::MissingOperand));
    }

    #[test]
    fn test_adjacent_groups_yield_last_value() {
        assert_eq!(eval("(1)(2)"), Ok(2));
    }

    #[test]
    fn test_overflow() {
        assert_eq!(eval("99999999999999999999"), Err(FormulaError::Overflow));
        assert_eq!(eval("9223372036854775807+1"), Err(FormulaError::Overflow));
    }

    #[test]
    fn test_non_numeric_operand() {
        assert_eq!(
            eval("A1+1"),
            Err(FormulaError::NonNumericOperand("A1".to_string()))
        );
    }
}
