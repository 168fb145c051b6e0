//! Cell address type

use crate::error::{Error, Result};
use crate::MAX_COLUMNS;
use lazy_regex::regex_is_match;
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "C12")
///
/// Columns are named by a single letter (A-Z) and rows are numbered from 1.
/// Both are stored 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Column index (0-based, A=0, B=1, ..., Z=25)
    pub col: u8,
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
}

impl CellAddress {
    /// Create a new cell address from 0-based indices
    pub fn new(col: u8, row: u32) -> Self {
        Self { col, row }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use tabcalc_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("A1").unwrap();
    /// assert_eq!(addr.col, 0);
    /// assert_eq!(addr.row, 0);
    ///
    /// let addr = CellAddress::parse("c12").unwrap();
    /// assert_eq!(addr.col, 2);
    /// assert_eq!(addr.row, 11);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut chars = s.chars();

        let letter = chars
            .next()
            .ok_or_else(|| Error::InvalidAddress("empty address".into()))?;
        let col = Self::letter_to_column(letter)?;

        let row_str = chars.as_str();
        if row_str.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        // Rows are 1-based in A1 notation, 0-based internally
        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Ok(Self { col, row: row - 1 })
    }

    /// Parse an operand that has the shape of a formula cell reference.
    ///
    /// Formula references are one letter followed by one to three digits
    /// with no leading zero (`A1` through `Z999`). Anything else yields
    /// `None`.
    pub fn parse_reference(token: &str) -> Option<Self> {
        if !Self::is_reference(token) {
            return None;
        }
        Self::parse(token).ok()
    }

    /// Check whether a token has the shape of a formula cell reference
    pub fn is_reference(token: &str) -> bool {
        regex_is_match!(r"^[a-zA-Z][1-9][0-9]{0,2}$", token)
    }

    /// Convert a column index to its letter (0 = A, 25 = Z)
    pub fn column_to_letter(col: u8) -> char {
        (b'A' + col) as char
    }

    /// Convert a column letter to its index (A = 0, Z = 25), case insensitive
    pub fn letter_to_column(letter: char) -> Result<u8> {
        if !letter.is_ascii_alphabetic() {
            return Err(Error::InvalidAddress(format!(
                "invalid column letter '{}'",
                letter
            )));
        }
        let col = letter.to_ascii_uppercase() as u8 - b'A';
        debug_assert!((col as usize) < MAX_COLUMNS);
        Ok(col)
    }

    /// Column letter of this address
    pub fn column_letter(&self) -> char {
        Self::column_to_letter(self.col)
    }

    /// 1-based row number of this address
    pub fn row_number(&self) -> u32 {
        self.row + 1
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", self.column_letter(), self.row_number())
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
