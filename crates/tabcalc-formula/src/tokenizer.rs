//! Formula tokenizer
//!
//! Splits a formula body (the text after `=`) into single-character
//! operators and parentheses plus operand runs. Whitespace is dropped
//! everywhere, including inside an operand run.

use crate::error::{FormulaError, FormulaResult};
use std::fmt;
use tabcalc_core::cell::is_number;

/// Arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Map an operator character to its operator
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

/// Formula tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Number literal or (before resolution) a cell reference
    Operand(String),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl Token {
    /// Create an operand token
    pub fn operand<S: Into<String>>(s: S) -> Self {
        Token::Operand(s.into())
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }

    pub fn is_paren(&self) -> bool {
        matches!(self, Token::LeftParen | Token::RightParen)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(s) => write!(f, "{}", s),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// Tokenize a formula body without checking operand shape.
///
/// # Example
/// ```rust
/// use tabcalc_formula::{tokenize, Operator, Token};
///
/// let tokens = tokenize("(A1 + 2)*3");
/// assert_eq!(tokens[0], Token::LeftParen);
/// assert_eq!(tokens[1], Token::operand("A1"));
/// assert_eq!(tokens[2], Token::Operator(Operator::Add));
/// assert_eq!(tokens.len(), 7);
/// ```
pub fn tokenize(body: &str) -> Vec<Token> {
    scan(body, |_| Ok(())).unwrap_or_default()
}

/// Tokenize an arithmetic-only formula body.
///
/// Every operand must have number shape; the first operand that does not
/// stops tokenization with [`FormulaError::NonNumericOperand`].
pub fn tokenize_expression(body: &str) -> FormulaResult<Vec<Token>> {
    scan(body, |operand| {
        if is_number(operand) {
            Ok(())
        } else {
            Err(FormulaError::NonNumericOperand(operand.to_string()))
        }
    })
}

fn scan<F>(body: &str, check_operand: F) -> FormulaResult<Vec<Token>>
where
    F: Fn(&str) -> FormulaResult<()>,
{
    let mut tokens = Vec::new();
    let mut operand = String::new();

    for c in body.chars() {
        let token = match c {
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            _ => match Operator::from_char(c) {
                Some(op) => Token::Operator(op),
                None => {
                    if !c.is_whitespace() {
                        operand.push(c);
                    }
                    continue;
                }
            },
        };

        if !operand.is_empty() {
            check_operand(&operand)?;
            tokens.push(Token::Operand(std::mem::take(&mut operand)));
        }
        tokens.push(token);
    }

    if !operand.is_empty() {
        check_operand(&operand)?;
        tokens.push(Token::Operand(operand));
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn op(c: char) -> Token {
        Token::Operator(Operator::from_char(c).unwrap())
    }

    #[test]
    fn test_tokenize_operators_and_operands() {
        assert_eq!(
            tokenize("12+3*(4-5)/6"),
            vec![
                Token::operand("12"),
                op('+'),
                Token::operand("3"),
                op('*'),
                Token::LeftParen,
                Token::operand("4"),
                op('-'),
                Token::operand("5"),
                Token::RightParen,
                op('/'),
                Token::operand("6"),
            ]
        );
    }

    #[test]
    fn test_tokenize_drops_whitespace() {
        assert_eq!(
            tokenize(" 1 +  2 "),
            vec![Token::operand("1"), op('+'), Token::operand("2")]
        );
        // Whitespace inside an operand run joins the pieces
        assert_eq!(tokenize("5 5"), vec![Token::operand("55")]);
    }

    #[test]
    fn test_tokenize_keeps_reference_operands() {
        assert_eq!(
            tokenize("A1+b22"),
            vec![Token::operand("A1"), op('+'), Token::operand("b22")]
        );
    }

    #[test]
    fn test_tokenize_expression_rejects_non_numeric_operand() {
        assert!(matches!(
            tokenize_expression("1+2.5"),
            Err(FormulaError::NonNumericOperand(ref s)) if s == "2.5"
        ));
        assert!(matches!(
            tokenize_expression("2^3"),
            Err(FormulaError::NonNumericOperand(_))
        ));
        assert_eq!(
            tokenize_expression("-007").unwrap(),
            vec![op('-'), Token::operand("007")]
        );
    }

    #[test]
    fn test_tokenize_empty_body() {
        assert!(tokenize("").is_empty());
        assert!(tokenize_expression("   ").unwrap().is_empty());
    }

    #[test]
    fn test_token_display() {
        let rendered: String = tokenize("(1+A2)").iter().map(Token::to_string).collect();
        assert_eq!(rendered, "(1+A2)");
    }
}
