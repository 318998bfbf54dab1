//! Vending Engine Library
//! # Overview
//!
//! This library provides a streaming CSV-driven transaction controller for a
//! soft-drink vending machine: coins and notes in, drinks and change out.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (events, catalog, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::machine`] - The finite-state transaction controller
//!   - [`core::inventory`] - Stock tracking and the dispensed ledger
//! - [`io`] - CSV event reading, catalog loading, and report writing
//! - [`session`] - The synchronous session pipeline tying the above together
//!
//! # Machine States
//!
//! The controller moves through three states:
//!
//! - **Idle**: No usable balance; accepts coins and notes
//! - **CoinsInserted**: Coins received but below the purchase threshold;
//!   accepts further coins only
//! - **Accept**: Balance covers at least one drink; dispensing and withdrawal
//!   are allowed
//!
//! # Money
//!
//! All amounts are whole shillings. Accepted coins are 10, 20 and 40;
//! accepted notes are 50, 100, 200, 500 and 1000. Every drink in the default
//! catalog costs 50 shillings.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod session;
pub mod types;

pub use core::{Inventory, VendingMachine};
pub use io::write_report_csv;
pub use session::{run_session, SessionSummary};
pub use types::{
    DispenseReceipt, DrinkConfig, EventRecord, MachineConfig, MachineState, Quantity, Selection,
    Shillings, VendingError,
};
