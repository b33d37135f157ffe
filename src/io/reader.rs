//! Streaming operation-script reader
//!
//! Provides an iterator over operation records from a CSV file. Format concerns are
//! delegated to the csv_format module.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record parsing errors are yielded as Err variants with line numbers
//!
//! ```no_run
//! use bank_account_engine::io::OperationReader;
//! use std::path::Path;
//!
//! let reader = OperationReader::new(Path::new("script.csv")).unwrap();
//! let records: Vec<_> = reader.filter_map(Result::ok).collect();
//! println!("Parsed {} operations", records.len());
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{AccountError, OperationRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Streaming CSV reader over operation records
///
/// Reads one record at a time, so memory use does not grow with the script length.
#[derive(Debug)]
pub struct OperationReader {
    reader: csv::Reader<File>,
    headers: StringRecord,
}

impl OperationReader {
    /// Open a script file
    ///
    /// The CSV reader trims whitespace from all fields and allows rows with fewer
    /// columns than the header, since trailing optional columns may be omitted.
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` if the path does not exist, `IoError` for any other
    /// failure to open it, and `ParseError` if the header row cannot be read.
    pub fn new(path: &Path) -> Result<Self, AccountError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AccountError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => AccountError::from(e),
        })?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);
        let headers = reader.headers()?.clone();

        Ok(Self { reader, headers })
    }
}

impl Iterator for OperationReader {
    type Item = Result<OperationRecord, AccountError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = StringRecord::new();
        match self.reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => return Some(Err(AccountError::from(e))),
        }
        // Physical line of the record, so skipped blank lines do not shift it
        let line = record.position().map(|pos| pos.line());

        Some(
            record
                .deserialize::<CsvRecord>(Some(&self.headers))
                .map_err(AccountError::from)
                .and_then(convert_csv_record)
                .map_err(|e| match e {
                    AccountError::ParseError { message, .. } => {
                        AccountError::ParseError { line, message }
                    }
                    other => other,
                }),
        )
    }
}
