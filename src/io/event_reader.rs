//! Streaming CSV event reader
//!
//! Provides a streaming iterator over event records from a CSV file,
//! delegating format concerns to the csv_format module.
//!
//! # Design
//!
//! The EventReader wraps a csv::Reader and deserializes one record at a time,
//! so memory usage stays constant regardless of how long the event stream is.
//! Each yielded item is a `Result`: malformed rows become errors carrying the
//! line number, and the caller decides whether to skip or abort.

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{EventRecord, VendingError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming event reader over a CSV file
///
/// Implements Iterator, yielding `Result<EventRecord, VendingError>` per row.
#[derive(Debug)]
pub struct EventReader {
    reader: csv::Reader<File>,
    line_num: u64,
}

impl EventReader {
    /// Open an event CSV file for streaming iteration
    ///
    /// The CSV reader trims whitespace and allows short rows, since the
    /// payload columns are optional per event type.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the event CSV file
    ///
    /// # Returns
    ///
    /// * `Ok(EventReader)` if the file opened successfully
    /// * `Err(VendingError)` if the file could not be opened
    pub fn new(path: &Path) -> Result<Self, VendingError> {
        let file = File::open(path).map_err(|e| VendingError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }

    /// Attach the current line number to a conversion error
    fn at_line(&self, error: VendingError) -> VendingError {
        match error {
            VendingError::ParseError { message, .. } => VendingError::ParseError {
                // Header occupies line 1
                line: Some(self.line_num + 1),
                message,
            },
            other => other,
        }
    }
}

impl Iterator for EventReader {
    type Item = Result<EventRecord, VendingError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();

        match deserializer.next()? {
            Ok(csv_record) => {
                self.line_num += 1;
                Some(convert_csv_record(csv_record).map_err(|e| self.at_line(e)))
            }
            Err(e) => {
                self.line_num += 1;
                Some(Err(self.at_line(VendingError::from(e))))
            }
        }
    }
}
