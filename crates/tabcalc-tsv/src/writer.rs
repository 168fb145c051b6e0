//! Grid writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::TsvResult;
use crate::options::{LineTerminator, TsvWriteOptions};
use tabcalc_core::Spreadsheet;

/// Grid writer
///
/// Writes each cell's current value, so a spreadsheet is normally calculated
/// before it is written. Every value is followed by the delimiter.
pub struct TsvWriter;

impl TsvWriter {
    /// Write a spreadsheet to a file
    pub fn write_file<P: AsRef<Path>>(
        sheet: &Spreadsheet,
        path: P,
        options: &TsvWriteOptions,
    ) -> TsvResult<()> {
        let file = File::create(path)?;
        Self::write(sheet, file, options)
    }

    /// Write a spreadsheet to a writer
    pub fn write<W: Write>(
        sheet: &Spreadsheet,
        writer: W,
        options: &TsvWriteOptions,
    ) -> TsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote_style(csv::QuoteStyle::Never)
            .terminator(terminator)
            .flexible(true)
            .from_writer(writer);

        if options.labels {
            let mut header: Vec<String> = sheet
                .columns()
                .map(|(letter, _)| letter.to_string())
                .collect();
            if header.is_empty() {
                header.push(String::new());
            }
            header[0].insert_str(0, "  ");
            header.push(String::new());
            csv_writer.write_record(&header)?;
        }

        if sheet.column_count() > 0 {
            for (idx, mut record) in sheet.to_rows().into_iter().enumerate() {
                if options.labels {
                    if let Some(first) = record.first_mut() {
                        first.insert_str(0, &format!("{} ", idx + 1));
                    }
                }
                record.push(String::new());
                csv_writer.write_record(&record)?;
            }
        }

        csv_writer.flush()?;
        log::debug!(
            "wrote grid: {} rows x {} columns",
            sheet.row_count(),
            sheet.column_count()
        );
        Ok(())
    }
}
