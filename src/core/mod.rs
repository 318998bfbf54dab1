//! Core business logic module
//!
//! This module contains the transaction controller and its ledger:
//! - `machine` - the finite-state transaction controller
//! - `inventory` - stock tracking and the dispensed ledger

pub mod inventory;
pub mod machine;

pub use inventory::{DispensePlan, Inventory, StockEntry, StockReport};
pub use machine::VendingMachine;
