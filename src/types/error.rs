//! Error types for the vending engine
//!
//! This module defines all error types that can occur while driving the
//! machine. Errors are structured results the presentation layer can render
//! without crashing; the controller never raises an uncaught fault.
//!
//! # Error Categories
//!
//! - **Controller Errors**: invalid state, insufficient balance, no balance
//! - **Selection Errors**: unknown drink, out of stock
//! - **Denomination Errors**: coin or note outside the accepted sets
//! - **I/O Errors**: file access and CSV parsing at the session boundary

use crate::types::event::{MachineState, Quantity, Shillings};
use thiserror::Error;

/// Main error type for the vending engine
///
/// Each variant carries enough context to produce a user-facing message
/// and to let callers match on the failure kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VendingError {
    /// Action attempted from a state that forbids it
    ///
    /// Recoverable: the machine state is left unchanged.
    #[error("Cannot {operation} while the machine is {state}")]
    InvalidState {
        /// The operation that was attempted
        operation: String,
        /// The state the machine was in
        state: MachineState,
    },

    /// Dispense requested exceeding the current balance
    ///
    /// Recoverable: neither balance nor inventory is touched.
    #[error("Insufficient balance: {balance} shillings available, {required} required")]
    InsufficientBalance {
        /// Current balance in shillings
        balance: Shillings,
        /// Total cost of the requested selection
        required: Shillings,
    },

    /// Withdraw requested with a zero balance
    #[error("No balance to withdraw")]
    NoBalance,

    /// Coin or note value outside the accepted denomination set
    #[error("{value} is not an accepted {kind} denomination")]
    InvalidDenomination {
        /// The rejected value
        value: Shillings,
        /// "coin" or "note"
        kind: String,
    },

    /// Selection names a drink the catalog does not carry
    #[error("Unknown drink '{drink}'")]
    UnknownDrink {
        /// The unrecognized drink name
        drink: String,
    },

    /// Selection requests more units than are in stock
    ///
    /// Recoverable: the whole dispense is rejected, nothing is decremented.
    #[error("Not enough {drink} in stock: {available} available, {requested} requested")]
    OutOfStock {
        /// The drink that ran short
        drink: String,
        /// Units remaining in the machine
        available: Quantity,
        /// Units requested across the whole selection
        requested: Quantity,
    },

    /// I/O error while reading events or writing the report
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error in the event stream
    ///
    /// Recoverable: the malformed record is skipped and processing continues.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for VendingError {
    fn from(error: std::io::Error) -> Self {
        VendingError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for VendingError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        VendingError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl VendingError {
    /// Create an InvalidState error
    pub fn invalid_state(operation: &str, state: MachineState) -> Self {
        VendingError::InvalidState {
            operation: operation.to_string(),
            state,
        }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(balance: Shillings, required: Shillings) -> Self {
        VendingError::InsufficientBalance { balance, required }
    }

    /// Create an InvalidDenomination error
    pub fn invalid_denomination(value: Shillings, kind: &str) -> Self {
        VendingError::InvalidDenomination {
            value,
            kind: kind.to_string(),
        }
    }

    /// Create an UnknownDrink error
    pub fn unknown_drink(drink: &str) -> Self {
        VendingError::UnknownDrink {
            drink: drink.to_string(),
        }
    }

    /// Create an OutOfStock error
    pub fn out_of_stock(drink: &str, available: Quantity, requested: Quantity) -> Self {
        VendingError::OutOfStock {
            drink: drink.to_string(),
            available,
            requested,
        }
    }
}
