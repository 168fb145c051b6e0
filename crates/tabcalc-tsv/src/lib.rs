//! # tabcalc-tsv
//!
//! Tab-delimited grid reader and writer for tabcalc.
//!
//! The input format is a header line `rows<TAB>columns` followed by one
//! line per row with exactly `columns` tab-separated raw cells.

mod reader;
mod writer;
mod options;
mod error;

pub use reader::TsvReader;
pub use writer::TsvWriter;
pub use options::{LineTerminator, TsvReadOptions, TsvWriteOptions};
pub use error::{TsvError, TsvResult};
