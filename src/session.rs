//! Synchronous session pipeline
//!
//! A session streams events from a CSV file through one `VendingMachine`
//! and writes the final stock report to the output writer.
//!
//! # Design
//!
//! The session owns the transient drink selection: `select` events accumulate
//! (drink, quantity) lines, a `dispense` event hands the accumulated lines to
//! the controller, and the selection is cleared after every dispense attempt
//! and on reset. It never survives either, matching the single-user,
//! single-session model.
//!
//! # Error Handling
//!
//! Fatal errors (input file not found, output write failure) are returned.
//! Per-event errors — malformed rows and rejected machine operations — are
//! logged to stderr, counted, and processing continues with the next event.

use crate::core::VendingMachine;
use crate::io::event_reader::EventReader;
use crate::io::write_report_csv;
use crate::types::{EventRecord, MachineConfig, MachineState, Selection, Shillings, VendingError};
use std::io::Write;
use std::path::Path;

/// Summary of a completed session
///
/// Rendered by the caller (the CLI prints it to stderr so stdout stays a
/// clean CSV report).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Events applied successfully
    pub events_processed: usize,

    /// Events rejected (parse errors or machine errors)
    pub events_rejected: usize,

    /// Final balance in shillings
    pub balance: Shillings,

    /// Final machine state
    pub state: MachineState,
}

/// Run a session: stream events from `input_path`, drive a machine built
/// from `config`, and write the stock report to `output`
///
/// # Arguments
///
/// * `input_path` - Path to the event CSV file
/// * `config` - Machine configuration (catalog, denominations, thresholds)
/// * `output` - Writer receiving the final stock report CSV
///
/// # Returns
///
/// * `Ok(SessionSummary)` if the stream was consumed and the report written
/// * `Err(VendingError)` on a fatal error (unreadable input, write failure)
pub fn run_session(
    input_path: &Path,
    config: MachineConfig,
    output: &mut dyn Write,
) -> Result<SessionSummary, VendingError> {
    let reader = EventReader::new(input_path)?;
    let mut machine = VendingMachine::with_config(config);
    let mut selection: Vec<Selection> = Vec::new();
    let mut events_processed = 0;
    let mut events_rejected = 0;

    for result in reader {
        let outcome = match result {
            Ok(event) => apply_event(&mut machine, &mut selection, event),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => events_processed += 1,
            Err(e) => {
                events_rejected += 1;
                eprintln!("Event error: {}", e);
            }
        }
    }

    write_report_csv(&machine.report(), output)?;

    Ok(SessionSummary {
        events_processed,
        events_rejected,
        balance: machine.balance(),
        state: machine.state(),
    })
}

/// Apply one event to the machine, maintaining the transient selection
fn apply_event(
    machine: &mut VendingMachine,
    selection: &mut Vec<Selection>,
    event: EventRecord,
) -> Result<(), VendingError> {
    match event {
        EventRecord::InsertCoin { value } => machine.insert_coin(value).map(|_| ()),
        EventRecord::InsertNote { value } => machine.insert_note(value).map(|_| ()),
        EventRecord::Select { drink, quantity } => {
            selection.push(Selection::new(drink, quantity));
            Ok(())
        }
        EventRecord::Dispense => {
            let requested = std::mem::take(selection);
            machine.dispense(&requested).map(|_| ())
        }
        EventRecord::Withdraw => machine.withdraw().map(|_| ()),
        EventRecord::Reset => {
            selection.clear();
            machine.reset();
            Ok(())
        }
    }
}
