//! Cell variant classification

use lazy_regex::regex_is_match;
use std::fmt;

/// The five variants a raw cell string can represent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Zero-length content
    Empty,
    /// Literal text, expected to carry a leading `'` marker
    Text,
    /// Optional sign followed by digits
    Number,
    /// Formula made only of numbers, operators and parentheses
    Expression,
    /// Formula that mentions other cells (or anything non-arithmetic)
    Reference,
}

impl CellKind {
    /// All variants, in classification priority order
    pub const ALL: [CellKind; 5] = [
        CellKind::Expression,
        CellKind::Reference,
        CellKind::Empty,
        CellKind::Number,
        CellKind::Text,
    ];

    /// Classify a raw cell string.
    ///
    /// The first matching rule wins: arithmetic-only formula, any other
    /// formula, empty, number, printable text. Returns `None` when no rule
    /// matches, which only happens for strings containing control
    /// characters.
    ///
    /// # Examples
    /// ```
    /// use tabcalc_core::CellKind;
    ///
    /// assert_eq!(CellKind::classify("=1+2"), Some(CellKind::Expression));
    /// assert_eq!(CellKind::classify("=A1+2"), Some(CellKind::Reference));
    /// assert_eq!(CellKind::classify(""), Some(CellKind::Empty));
    /// assert_eq!(CellKind::classify("-42"), Some(CellKind::Number));
    /// assert_eq!(CellKind::classify("'hi"), Some(CellKind::Text));
    /// assert_eq!(CellKind::classify("a\u{7}b"), None);
    /// ```
    pub fn classify(raw: &str) -> Option<Self> {
        if is_expression(raw) {
            Some(CellKind::Expression)
        } else if raw.starts_with('=') {
            Some(CellKind::Reference)
        } else if raw.is_empty() {
            Some(CellKind::Empty)
        } else if is_number(raw) {
            Some(CellKind::Number)
        } else if is_printable(raw) {
            Some(CellKind::Text)
        } else {
            None
        }
    }

    /// Whether this variant holds a formula
    pub fn is_formula(&self) -> bool {
        matches!(self, CellKind::Expression | CellKind::Reference)
    }

    /// Get the display name for this variant
    pub fn as_str(&self) -> &'static str {
        match self {
            CellKind::Empty => "empty",
            CellKind::Text => "text",
            CellKind::Number => "number",
            CellKind::Expression => "expression",
            CellKind::Reference => "reference",
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// `=` followed by at least one arithmetic character
fn is_expression(raw: &str) -> bool {
    regex_is_match!(r"^=[0-9+\-*/^()., ]+$", raw)
}

/// Optional sign followed by zero or more digits.
///
/// A bare sign matches as well; callers decide what such a number means.
pub fn is_number(s: &str) -> bool {
    regex_is_match!(r"^[-+]?[0-9]*$", s)
}

fn is_printable(raw: &str) -> bool {
    !raw.chars().any(char::is_control)
}
