//! CSV format handling for event records, catalog files, and report output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for event deserialization
//! - Conversion from CSV records to domain events
//! - Catalog CSV loading
//! - Stock report serialization
//!
//! Conversion and report writing are pure (no file I/O) for easy testing.

use crate::core::StockReport;
use crate::types::{DrinkConfig, EventRecord, Quantity, Shillings, VendingError};
use serde::Deserialize;
use std::io::Write;
use std::path::Path;

/// CSV record structure for event deserialization
///
/// Matches the input CSV format with columns: event, value, drink, quantity.
/// All payload fields are optional because each event type uses a different
/// subset of them.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CsvRecord {
    pub event: String,
    pub value: Option<String>,
    pub drink: Option<String>,
    pub quantity: Option<String>,
}

fn parse_value(raw: &Option<String>, event: &str) -> Result<Shillings, VendingError> {
    let raw = raw
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| VendingError::ParseError {
            line: None,
            message: format!("{} event requires a value", event),
        })?;

    raw.parse::<Shillings>().map_err(|_| VendingError::ParseError {
        line: None,
        message: format!("Invalid value '{}' for {} event", raw, event),
    })
}

fn parse_quantity(raw: &Option<String>) -> Result<Quantity, VendingError> {
    let raw = raw
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| VendingError::ParseError {
            line: None,
            message: "select event requires a quantity".to_string(),
        })?;

    raw.parse::<Quantity>().map_err(|_| VendingError::ParseError {
        line: None,
        message: format!("Invalid quantity '{}' for select event", raw),
    })
}

/// Convert a CsvRecord to an EventRecord
///
/// This function:
/// - Parses the event name (case insensitive) into an event variant
/// - Validates that insert events carry a numeric value
/// - Validates that select events carry a drink and a numeric quantity
/// - Ignores payload fields the event type does not use
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
///
/// # Returns
///
/// * `Ok(EventRecord)` - Successfully converted record
/// * `Err(VendingError)` - Parse error describing the conversion failure
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<EventRecord, VendingError> {
    match csv_record.event.to_lowercase().as_str() {
        "insert_coin" => Ok(EventRecord::InsertCoin {
            value: parse_value(&csv_record.value, "insert_coin")?,
        }),
        "insert_note" => Ok(EventRecord::InsertNote {
            value: parse_value(&csv_record.value, "insert_note")?,
        }),
        "select" => {
            let drink = csv_record
                .drink
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or_else(|| VendingError::ParseError {
                    line: None,
                    message: "select event requires a drink".to_string(),
                })?;
            Ok(EventRecord::Select {
                drink: drink.to_string(),
                quantity: parse_quantity(&csv_record.quantity)?,
            })
        }
        "dispense" => Ok(EventRecord::Dispense),
        "withdraw" => Ok(EventRecord::Withdraw),
        "reset" => Ok(EventRecord::Reset),
        other => Err(VendingError::ParseError {
            line: None,
            message: format!("Invalid event type: '{}'", other),
        }),
    }
}

/// Load a drink catalog from a CSV file
///
/// Expects columns: drink, price, stock. Whitespace around fields is trimmed.
///
/// # Arguments
///
/// * `path` - Path to the catalog CSV file
///
/// # Returns
///
/// * `Ok(Vec<DrinkConfig>)` - The configured drinks, in file order
/// * `Err(VendingError)` - If the file cannot be opened or a row is malformed
pub fn read_catalog_csv(path: &Path) -> Result<Vec<DrinkConfig>, VendingError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| VendingError::IoError {
            message: format!("Failed to open catalog '{}': {}", path.display(), e),
        })?;

    let mut drinks = Vec::new();
    for result in reader.deserialize::<DrinkConfig>() {
        drinks.push(result?);
    }

    Ok(drinks)
}

/// Write the stock report to CSV format
///
/// Columns: drink, price, available, dispensed, selectable. Rows are written
/// in the order given (the inventory already sorts them by drink name).
///
/// # Arguments
///
/// * `report` - Stock report rows to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(VendingError)` if a write error occurred
pub fn write_report_csv(
    report: &[StockReport],
    output: &mut dyn Write,
) -> Result<(), VendingError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["drink", "price", "available", "dispensed", "selectable"])?;

    for row in report {
        writer.write_record(&[
            row.drink.clone(),
            row.price.to_string(),
            row.available.to_string(),
            row.dispensed.to_string(),
            row.selectable.to_string(),
        ])?;
    }

    writer.flush().map_err(VendingError::from)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn record(
        event: &str,
        value: Option<&str>,
        drink: Option<&str>,
        quantity: Option<&str>,
    ) -> CsvRecord {
        CsvRecord {
            event: event.to_string(),
            value: value.map(|s| s.to_string()),
            drink: drink.map(|s| s.to_string()),
            quantity: quantity.map(|s| s.to_string()),
        }
    }

    #[rstest]
    #[case::coin(record("insert_coin", Some("40"), None, None), EventRecord::InsertCoin { value: 40 })]
    #[case::coin_uppercase(record("INSERT_COIN", Some("10"), None, None), EventRecord::InsertCoin { value: 10 })]
    #[case::coin_padded(record("insert_coin", Some("  20  "), None, None), EventRecord::InsertCoin { value: 20 })]
    #[case::note(record("insert_note", Some("100"), None, None), EventRecord::InsertNote { value: 100 })]
    #[case::select(record("select", None, Some("Cola"), Some("2")), EventRecord::Select { drink: "Cola".to_string(), quantity: 2 })]
    #[case::select_padded(record("select", None, Some(" Cola "), Some(" 2 ")), EventRecord::Select { drink: "Cola".to_string(), quantity: 2 })]
    #[case::dispense(record("dispense", None, None, None), EventRecord::Dispense)]
    #[case::withdraw(record("withdraw", None, None, None), EventRecord::Withdraw)]
    #[case::reset(record("reset", None, None, None), EventRecord::Reset)]
    #[case::dispense_ignores_payload(record("dispense", Some("7"), Some("Cola"), Some("1")), EventRecord::Dispense)]
    fn test_convert_csv_record_valid(#[case] input: CsvRecord, #[case] expected: EventRecord) {
        assert_eq!(convert_csv_record(input).unwrap(), expected);
    }

    #[rstest]
    #[case::unknown_event(record("tilt", None, None, None), "Invalid event type")]
    #[case::coin_missing_value(record("insert_coin", None, None, None), "requires a value")]
    #[case::coin_empty_value(record("insert_coin", Some("  "), None, None), "requires a value")]
    #[case::coin_bad_value(record("insert_coin", Some("abc"), None, None), "Invalid value")]
    #[case::coin_negative_value(record("insert_coin", Some("-10"), None, None), "Invalid value")]
    #[case::note_missing_value(record("insert_note", None, None, None), "requires a value")]
    #[case::select_missing_drink(record("select", None, None, Some("1")), "requires a drink")]
    #[case::select_empty_drink(record("select", None, Some(""), Some("1")), "requires a drink")]
    #[case::select_missing_quantity(record("select", None, Some("Cola"), None), "requires a quantity")]
    #[case::select_bad_quantity(record("select", None, Some("Cola"), Some("two")), "Invalid quantity")]
    fn test_convert_csv_record_errors(#[case] input: CsvRecord, #[case] expected_error: &str) {
        let error = convert_csv_record(input).unwrap_err();
        assert!(
            error.to_string().contains(expected_error),
            "unexpected error: {}",
            error
        );
    }

    #[test]
    fn test_read_catalog_csv() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "drink,price,stock").unwrap();
        writeln!(file, "Cola,50,10").unwrap();
        writeln!(file, "Tonic, 30 , 4").unwrap();
        file.flush().unwrap();

        let drinks = read_catalog_csv(file.path()).unwrap();

        assert_eq!(
            drinks,
            vec![
                DrinkConfig::new("Cola", 50, 10),
                DrinkConfig::new("Tonic", 30, 4),
            ]
        );
    }

    #[test]
    fn test_read_catalog_csv_missing_file() {
        let result = read_catalog_csv(Path::new("no_such_catalog.csv"));
        assert!(matches!(result.unwrap_err(), VendingError::IoError { .. }));
    }

    #[test]
    fn test_read_catalog_csv_malformed_row() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "drink,price,stock").unwrap();
        writeln!(file, "Cola,cheap,10").unwrap();
        file.flush().unwrap();

        let result = read_catalog_csv(file.path());
        assert!(matches!(result.unwrap_err(), VendingError::ParseError { .. }));
    }

    #[rstest]
    #[case::empty(
        vec![],
        "drink,price,available,dispensed,selectable\n"
    )]
    #[case::single_row(
        vec![StockReport {
            drink: "Cola".to_string(),
            price: 50,
            available: 9,
            dispensed: 1,
            selectable: true,
        }],
        "drink,price,available,dispensed,selectable\nCola,50,9,1,true\n"
    )]
    #[case::sold_out_row(
        vec![StockReport {
            drink: "Fanta".to_string(),
            price: 50,
            available: 0,
            dispensed: 7,
            selectable: false,
        }],
        "drink,price,available,dispensed,selectable\nFanta,50,0,7,false\n"
    )]
    fn test_write_report_csv(#[case] report: Vec<StockReport>, #[case] expected: &str) {
        let mut output = Vec::new();
        write_report_csv(&report, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }
}
