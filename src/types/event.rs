//! Event-related types for the vending engine
//!
//! This module defines the machine states, the discrete events the controller
//! consumes, and the selection lines a dispense request is built from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Monetary value in currency subunits ("shillings")
///
/// Unsigned by construction, so a balance can never go negative.
pub type Shillings = u64;

/// Drink unit count
pub type Quantity = u32;

/// Machine states of the transaction controller
///
/// The state drives which events are legal:
///
/// - **Idle**: initial and terminal state; accepts coins and notes
/// - **CoinsInserted**: coins accepted but balance still below the threshold;
///   only further coins are legal
/// - **Accept**: balance has reached the threshold; dispense and withdraw
///   become legal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineState {
    /// No money inserted, nothing unlocked
    Idle,

    /// Coins inserted but balance below the accept threshold
    CoinsInserted,

    /// Balance at or above the threshold; dispensing unlocked
    Accept,
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MachineState::Idle => "Idle",
            MachineState::CoinsInserted => "CoinsInserted",
            MachineState::Accept => "Accept",
        };
        write!(f, "{}", label)
    }
}

/// A single line of a dispense request: a drink and a unit count
///
/// Selections are transient: the session layer accumulates them from `select`
/// events and they do not survive a dispense or a reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Drink name, as listed in the catalog
    pub drink: String,

    /// Requested unit count (zero is legal and dispenses nothing)
    pub quantity: Quantity,
}

impl Selection {
    pub fn new(drink: impl Into<String>, quantity: Quantity) -> Self {
        Selection {
            drink: drink.into(),
            quantity,
        }
    }
}

/// Input event record from the CSV stream
///
/// Each record is one discrete event delivered to the session. `Select`
/// events build the transient selection; the others map directly onto
/// controller operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventRecord {
    /// Insert a coin of the given value
    InsertCoin {
        /// Coin value in shillings
        value: Shillings,
    },

    /// Insert a note of the given value
    InsertNote {
        /// Note value in shillings
        value: Shillings,
    },

    /// Add a drink line to the pending selection
    Select {
        /// Drink name
        drink: String,
        /// Requested unit count
        quantity: Quantity,
    },

    /// Dispense the pending selection
    Dispense,

    /// Withdraw the remaining balance
    Withdraw,

    /// Restore the machine to its initial state
    Reset,
}

/// Receipt returned by a successful dispense
///
/// Carries what was dispensed and at what cost, so the presentation layer
/// can render the result without re-querying the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispenseReceipt {
    /// The selection lines that were dispensed
    pub dispensed: Vec<Selection>,

    /// Total cost charged against the balance
    pub total_cost: Shillings,

    /// Balance remaining after the dispense
    pub balance: Shillings,
}
