//! Catalog and machine configuration types
//!
//! The configuration a collaborator supplies before the machine starts:
//! the drink catalog (names, unit prices, initial stock), the accepted coin
//! and note sets, the accept threshold, and the low-balance cutoff.

use crate::types::event::{Quantity, Shillings};
use serde::{Deserialize, Serialize};

/// Coin values the machine accepts
pub const ACCEPTED_COINS: [Shillings; 3] = [10, 20, 40];

/// Note values the machine accepts
pub const ACCEPTED_NOTES: [Shillings; 5] = [50, 100, 200, 500, 1000];

/// Minimum balance required to unlock dispensing (the Accept state)
pub const ACCEPT_THRESHOLD: Shillings = 50;

/// Balance below which the machine reverts to Idle after a dispense
pub const LOW_BALANCE_CUTOFF: Shillings = 10;

/// Uniform unit price of every drink in the default catalog
pub const DRINK_PRICE: Shillings = 50;

/// One configured drink: name, unit price, and initial stock
///
/// Also the row format of a catalog CSV (`drink,price,stock`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkConfig {
    /// Drink name
    pub drink: String,

    /// Unit price in shillings
    pub price: Shillings,

    /// Units loaded into the machine at startup (and restored by reset)
    pub stock: Quantity,
}

impl DrinkConfig {
    pub fn new(drink: impl Into<String>, price: Shillings, stock: Quantity) -> Self {
        DrinkConfig {
            drink: drink.into(),
            price,
            stock,
        }
    }
}

/// Full machine configuration
///
/// The default configuration reproduces the reference machine: six drinks at
/// a uniform price of 50 shillings, coins {10, 20, 40}, notes
/// {50, 100, 200, 500, 1000}, accept threshold 50, low-balance cutoff 10.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// The drink catalog
    pub drinks: Vec<DrinkConfig>,

    /// Accepted coin denominations
    pub accepted_coins: Vec<Shillings>,

    /// Accepted note denominations
    pub accepted_notes: Vec<Shillings>,

    /// Minimum balance that unlocks the Accept state
    pub accept_threshold: Shillings,

    /// Balance below which a dispense drops the machine back to Idle
    pub low_balance_cutoff: Shillings,
}

impl MachineConfig {
    /// Create a configuration with the default denominations and thresholds
    /// but a custom drink catalog
    pub fn with_drinks(drinks: Vec<DrinkConfig>) -> Self {
        MachineConfig {
            drinks,
            ..MachineConfig::default()
        }
    }

    /// Whether `value` is an accepted coin
    pub fn is_accepted_coin(&self, value: Shillings) -> bool {
        self.accepted_coins.contains(&value)
    }

    /// Whether `value` is an accepted note
    pub fn is_accepted_note(&self, value: Shillings) -> bool {
        self.accepted_notes.contains(&value)
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            drinks: vec![
                DrinkConfig::new("Cola", DRINK_PRICE, 10),
                DrinkConfig::new("Sprite", DRINK_PRICE, 8),
                DrinkConfig::new("Water", DRINK_PRICE, 15),
                DrinkConfig::new("Juice", DRINK_PRICE, 12),
                DrinkConfig::new("Fanta", DRINK_PRICE, 7),
                DrinkConfig::new("Pepsi", DRINK_PRICE, 9),
            ],
            accepted_coins: ACCEPTED_COINS.to_vec(),
            accepted_notes: ACCEPTED_NOTES.to_vec(),
            accept_threshold: ACCEPT_THRESHOLD,
            low_balance_cutoff: LOW_BALANCE_CUTOFF,
        }
    }
}
