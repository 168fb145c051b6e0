//! TSV options

/// Options for reading grid files
#[derive(Debug, Clone)]
pub struct TsvReadOptions {
    /// Field delimiter (default: tab)
    pub delimiter: u8,
    /// Require the number of data lines to match the header's row count
    pub strict_rows: bool,
}

impl Default for TsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            strict_rows: true,
        }
    }
}

/// Options for writing evaluated grids
#[derive(Debug, Clone)]
pub struct TsvWriteOptions {
    /// Field delimiter (default: tab)
    pub delimiter: u8,
    /// Write the column-letter header and row-number prefixes
    pub labels: bool,
    /// Line terminator
    pub line_terminator: LineTerminator,
}

impl Default for TsvWriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            labels: true,
            line_terminator: LineTerminator::LF,
        }
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// Unix-style (LF)
    LF,
    /// Windows-style (CRLF)
    CRLF,
}
