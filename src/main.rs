//! Vending Engine CLI
//!
//! Command-line interface for replaying vending machine sessions from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- events.csv > report.csv
//! cargo run -- --catalog drinks.csv events.csv > report.csv
//! ```
//!
//! The program reads session events from the input CSV file, drives the
//! transaction controller through them, and writes the final stock report to
//! stdout. Per-event errors and the session summary go to stderr, so stdout
//! stays a clean CSV report.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use std::process;
use vending_engine::cli;
use vending_engine::io::read_catalog_csv;
use vending_engine::session::run_session;
use vending_engine::types::MachineConfig;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // A catalog file replaces the built-in drink list
    let config = match &args.catalog {
        Some(path) => match read_catalog_csv(path) {
            Ok(drinks) => MachineConfig::with_drinks(drinks),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => MachineConfig::default(),
    };

    // Replay the session, report goes to stdout
    let mut output = std::io::stdout();
    match run_session(&args.input_file, config, &mut output) {
        Ok(summary) => {
            eprintln!(
                "Session complete: {} events processed, {} rejected, balance {} shillings, state {}",
                summary.events_processed, summary.events_rejected, summary.balance, summary.state
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
