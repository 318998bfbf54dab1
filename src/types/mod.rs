//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `catalog`: catalog and machine configuration types
//! - `event`: machine states, event records, and selections
//! - `error`: error types for the vending engine

pub mod catalog;
pub mod error;
pub mod event;

pub use catalog::{DrinkConfig, MachineConfig};
pub use error::VendingError;
pub use event::{DispenseReceipt, EventRecord, MachineState, Quantity, Selection, Shillings};
