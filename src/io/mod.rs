//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (event conversion, catalog loading,
//!   report serialization)
//! - `event_reader` - streaming CSV event reader with iterator interface

pub mod csv_format;
pub mod event_reader;

pub use csv_format::{convert_csv_record, read_catalog_csv, write_report_csv, CsvRecord};
pub use event_reader::EventReader;
