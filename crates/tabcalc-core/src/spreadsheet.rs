//! Spreadsheet type

use crate::cell::{Cell, CellAddress};
use crate::error::{Error, Result};
use crate::MAX_COLUMNS;

/// A grid of cells, stored column by column
///
/// Column `A` is index 0; within a column, row `n` is index `n - 1`. The
/// spreadsheet owns its cells. Evaluation borrows it mutably for the length
/// of one call, so cells never hold a handle back to the grid.
#[derive(Debug, Clone, Default)]
pub struct Spreadsheet {
    columns: Vec<Vec<Cell>>,
}

impl Spreadsheet {
    /// Create an empty spreadsheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a spreadsheet from a row-major table of raw strings.
    ///
    /// Every row must have as many fields as the first one. Columns are
    /// named sequentially from `A`.
    pub fn from_rows<R, S>(rows: R) -> Result<Self>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut columns: Vec<Vec<Cell>> = Vec::new();
        let mut width = None;

        for (row_idx, row) in rows.into_iter().enumerate() {
            let fields: Vec<String> = row.into_iter().map(Into::into).collect();

            let expected = *width.get_or_insert(fields.len());
            if fields.len() != expected {
                return Err(Error::RaggedRow {
                    row: row_idx + 1,
                    expected,
                    actual: fields.len(),
                });
            }
            if expected > MAX_COLUMNS {
                return Err(Error::TooManyColumns(expected));
            }
            if columns.is_empty() {
                columns.resize_with(expected, Vec::new);
            }

            for (col_idx, raw) in fields.into_iter().enumerate() {
                let address = CellAddress::new(col_idx as u8, row_idx as u32);
                columns[col_idx].push(Cell::new(address, raw)?);
            }
        }

        Ok(Self { columns })
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows (the longest column)
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if the spreadsheet has no cells
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }

    /// Get the cells of a column by letter (case insensitive)
    pub fn column(&self, letter: char) -> Option<&[Cell]> {
        let col = CellAddress::letter_to_column(letter).ok()?;
        self.columns.get(col as usize).map(Vec::as_slice)
    }

    /// Iterate over columns as `(letter, cells)` pairs, from `A`
    pub fn columns(&self) -> impl Iterator<Item = (char, &[Cell])> + '_ {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, cells)| (CellAddress::column_to_letter(idx as u8), cells.as_slice()))
    }

    /// Iterate over every cell, column by column
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.columns.iter().flatten()
    }

    /// Addresses of every cell, column by column
    pub fn addresses(&self) -> Vec<CellAddress> {
        self.cells().map(Cell::address).collect()
    }

    /// Get a cell by address
    pub fn cell(&self, addr: CellAddress) -> Option<&Cell> {
        self.columns
            .get(addr.col as usize)
            .and_then(|cells| cells.get(addr.row as usize))
    }

    /// Get a mutable cell by address
    pub fn cell_mut(&mut self, addr: CellAddress) -> Option<&mut Cell> {
        self.columns
            .get_mut(addr.col as usize)
            .and_then(|cells| cells.get_mut(addr.row as usize))
    }

    /// Look up a cell, reporting which part of the address is out of range
    pub fn try_cell(&self, addr: CellAddress) -> Result<&Cell> {
        let cells = self
            .columns
            .get(addr.col as usize)
            .ok_or_else(|| Error::ColumnNotFound(addr.column_letter()))?;
        cells
            .get(addr.row as usize)
            .ok_or(Error::RowOutOfBounds(addr.row_number(), cells.len()))
    }

    /// Get a cell by A1-style address string
    pub fn cell_by_name(&self, address: &str) -> Result<&Cell> {
        let addr = CellAddress::parse(address)?;
        self.try_cell(addr)
    }

    /// Current value of a cell (raw content if not evaluated yet)
    pub fn value(&self, addr: CellAddress) -> Option<&str> {
        self.cell(addr).map(Cell::value)
    }

    /// Current values as a row-major table
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        (0..self.row_count())
            .map(|row| {
                self.columns
                    .iter()
                    .map(|cells| {
                        cells
                            .get(row)
                            .map(|cell| cell.value().to_string())
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellKind;
    use pretty_assertions::assert_eq;

    fn sample() -> Spreadsheet {
        Spreadsheet::from_rows(vec![vec!["5", "=A1+1"], vec!["'x", ""]]).unwrap()
    }

    #[test]
    fn test_from_rows_layout() {
        let sheet = sample();
        assert_eq!(sheet.column_count(), 2);
        assert_eq!(sheet.row_count(), 2);

        let a = sheet.column('A').unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(a[0].raw(), "5");
        assert_eq!(a[1].raw(), "'x");

        let b2 = sheet.cell_by_name("B2").unwrap();
        assert_eq!(b2.kind(), CellKind::Empty);
        assert_eq!(b2.address(), CellAddress::new(1, 1));
    }

    #[test]
    fn test_columns_are_lettered_from_a() {
        let sheet = sample();
        let letters: Vec<char> = sheet.columns().map(|(letter, _)| letter).collect();
        assert_eq!(letters, vec!['A', 'B']);
        assert!(sheet.column('b').is_some());
        assert!(sheet.column('C').is_none());
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let err = Spreadsheet::from_rows(vec![vec!["1", "2"], vec!["3"]]).unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedRow {
                row: 2,
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_from_rows_rejects_unclassifiable_content() {
        let err = Spreadsheet::from_rows(vec![vec!["ok", "\u{1}"]]).unwrap_err();
        assert!(matches!(err, Error::UnknownFormat { .. }));
    }

    #[test]
    fn test_from_rows_rejects_too_many_columns() {
        let row: Vec<String> = (0..27).map(|i| i.to_string()).collect();
        let err = Spreadsheet::from_rows(vec![row]).unwrap_err();
        assert!(matches!(err, Error::TooManyColumns(27)));
    }

    #[test]
    fn test_try_cell_out_of_range() {
        let sheet = sample();
        assert!(matches!(
            sheet.try_cell(CellAddress::new(0, 4)),
            Err(Error::RowOutOfBounds(5, 2))
        ));
        assert!(matches!(
            sheet.try_cell(CellAddress::new(5, 0)),
            Err(Error::ColumnNotFound('F'))
        ));
    }

    #[test]
    fn test_to_rows_before_evaluation() {
        let sheet = sample();
        assert_eq!(
            sheet.to_rows(),
            vec![
                vec!["5".to_string(), "=A1+1".to_string()],
                vec!["'x".to_string(), String::new()],
            ]
        );
    }
}
