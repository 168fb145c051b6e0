//! Grid file reader

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{TsvError, TsvResult};
use crate::options::TsvReadOptions;
use tabcalc_core::cell::is_number;
use tabcalc_core::{Error, Spreadsheet, MAX_COLUMNS};

/// Grid file reader
///
/// Lines are split on the delimiter directly instead of going through the
/// `csv` parser: cells are never quoted, and `csv` drops blank lines, which
/// are real rows in a single-column grid.
pub struct TsvReader;

impl TsvReader {
    /// Read a grid file into a spreadsheet
    pub fn read_file<P: AsRef<Path>>(path: P, options: &TsvReadOptions) -> TsvResult<Spreadsheet> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read a grid from a reader into a spreadsheet
    pub fn read<R: Read>(reader: R, options: &TsvReadOptions) -> TsvResult<Spreadsheet> {
        let delimiter = options.delimiter as char;
        let mut lines = BufReader::new(reader).lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => return Err(TsvError::Header("empty input".into())),
        };
        let (row_count, column_count) = Self::parse_header(trim_line(&header), delimiter)?;

        if column_count > MAX_COLUMNS {
            return Err(Error::TooManyColumns(column_count).into());
        }

        let mut rows = Vec::new();
        for (idx, line) in lines.enumerate() {
            let line = line?;
            let fields: Vec<&str> = trim_line(&line).split(delimiter).collect();
            if fields.len() != column_count {
                return Err(TsvError::DimensionMismatch {
                    line: idx + 2,
                    what: "columns",
                    expected: column_count,
                    actual: fields.len(),
                });
            }
            rows.push(fields.into_iter().map(str::to_string).collect::<Vec<_>>());
        }

        if options.strict_rows && rows.len() != row_count {
            return Err(TsvError::DimensionMismatch {
                line: rows.len() + 1,
                what: "rows",
                expected: row_count,
                actual: rows.len(),
            });
        }

        log::debug!(
            "read grid: {} rows x {} columns",
            rows.len(),
            column_count
        );

        Ok(Spreadsheet::from_rows(rows)?)
    }

    /// Parse the `rows<TAB>columns` header line
    fn parse_header(line: &str, delimiter: char) -> TsvResult<(usize, usize)> {
        let fields: Vec<&str> = line.split(delimiter).collect();
        if fields.len() != 2 {
            return Err(TsvError::Header(format!(
                "expected 2 fields, found {}",
                fields.len()
            )));
        }

        let parse = |field: &str| -> TsvResult<usize> {
            if !is_number(field) {
                return Err(TsvError::Header(format!("not a number: {:?}", field)));
            }
            field
                .parse()
                .map_err(|_| TsvError::Header(format!("invalid dimension: {:?}", field)))
        };

        Ok((parse(fields[0])?, parse(fields[1])?))
    }
}

/// Strip a trailing carriage return left by CRLF line endings
fn trim_line(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}
