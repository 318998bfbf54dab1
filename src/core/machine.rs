//! Vending machine transaction controller
//!
//! This module provides the `VendingMachine`, the finite-state machine at the
//! heart of the engine. It coordinates the balance, the machine state, and the
//! [`Inventory`] ledger, enforcing the transition rules:
//!
//! - **Idle**: coins and notes are accepted; dispense and withdraw are not
//! - **CoinsInserted**: only further coins are accepted, until the balance
//!   reaches the accept threshold
//! - **Accept**: dispense and withdraw become legal
//! - `reset` is legal in every state
//!
//! Every operation is a pure state transition returning a structured result;
//! rendering is entirely the caller's concern. Rejected operations leave the
//! machine unchanged, including rejected dispenses: validation happens before
//! any balance or inventory mutation.

use crate::core::inventory::{Inventory, StockReport};
use crate::types::{
    DispenseReceipt, MachineConfig, MachineState, Quantity, Selection, Shillings, VendingError,
};

/// Finite-state transaction controller for one vending machine
///
/// Owns the balance, the current state, and the inventory ledger. One
/// instance serves one session; events are applied one at a time.
pub struct VendingMachine {
    config: MachineConfig,
    inventory: Inventory,
    balance: Shillings,
    state: MachineState,
}

impl VendingMachine {
    /// Create a machine with the default configuration
    ///
    /// Six drinks at 50 shillings, coins {10, 20, 40}, notes
    /// {50, 100, 200, 500, 1000}, accept threshold 50, low-balance cutoff 10.
    pub fn new() -> Self {
        Self::with_config(MachineConfig::default())
    }

    /// Create a machine from an explicit configuration
    pub fn with_config(config: MachineConfig) -> Self {
        let inventory = Inventory::new(&config.drinks);
        VendingMachine {
            config,
            inventory,
            balance: 0,
            state: MachineState::Idle,
        }
    }

    /// Insert a coin
    ///
    /// Legal in Idle and CoinsInserted. The balance increases by the coin
    /// value; the machine moves to Accept once the balance reaches the
    /// accept threshold, otherwise to CoinsInserted.
    ///
    /// # Arguments
    ///
    /// * `value` - Coin value in shillings
    ///
    /// # Returns
    ///
    /// * `Ok(Shillings)` - The new balance
    /// * `Err(VendingError)` - If the state forbids coins or the value is
    ///   not an accepted coin denomination
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The machine is in Accept (`InvalidState`)
    /// - The value is not in the accepted coin set (`InvalidDenomination`)
    pub fn insert_coin(&mut self, value: Shillings) -> Result<Shillings, VendingError> {
        if !matches!(
            self.state,
            MachineState::Idle | MachineState::CoinsInserted
        ) {
            return Err(VendingError::invalid_state("insert a coin", self.state));
        }

        if !self.config.is_accepted_coin(value) {
            return Err(VendingError::invalid_denomination(value, "coin"));
        }

        self.balance += value;
        self.state = if self.balance >= self.config.accept_threshold {
            MachineState::Accept
        } else {
            MachineState::CoinsInserted
        };

        Ok(self.balance)
    }

    /// Insert a note
    ///
    /// Legal only in Idle. Any accepted note meets the threshold, so the
    /// machine moves directly to Accept.
    ///
    /// # Arguments
    ///
    /// * `value` - Note value in shillings
    ///
    /// # Returns
    ///
    /// * `Ok(Shillings)` - The new balance
    /// * `Err(VendingError)` - If the state forbids notes or the value is
    ///   not an accepted note denomination
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The machine is not in Idle (`InvalidState`)
    /// - The value is not in the accepted note set (`InvalidDenomination`)
    pub fn insert_note(&mut self, value: Shillings) -> Result<Shillings, VendingError> {
        if self.state != MachineState::Idle {
            return Err(VendingError::invalid_state("insert a note", self.state));
        }

        if !self.config.is_accepted_note(value) {
            return Err(VendingError::invalid_denomination(value, "note"));
        }

        self.balance += value;
        self.state = MachineState::Accept;

        Ok(self.balance)
    }

    /// Dispense a selection of drinks
    ///
    /// Legal only in Accept. The request is validated in full before any
    /// mutation: every drink must exist, aggregate quantities must fit the
    /// available stock, and the total cost must fit the balance. Only then
    /// are the balance and the inventory updated together.
    ///
    /// A successful dispense that drops the balance below the low-balance
    /// cutoff returns the machine to Idle; otherwise it stays in Accept.
    /// An empty selection dispenses nothing and succeeds.
    ///
    /// # Arguments
    ///
    /// * `selections` - The requested (drink, quantity) lines
    ///
    /// # Returns
    ///
    /// * `Ok(DispenseReceipt)` - What was dispensed, at what cost, and the
    ///   remaining balance
    /// * `Err(VendingError)` - If the request was rejected; the machine is
    ///   left unchanged
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The machine is not in Accept (`InvalidState`)
    /// - A selection names an unknown drink (`UnknownDrink`)
    /// - A drink's aggregate quantity exceeds its stock (`OutOfStock`)
    /// - The total cost exceeds the balance (`InsufficientBalance`)
    pub fn dispense(&mut self, selections: &[Selection]) -> Result<DispenseReceipt, VendingError> {
        if self.state != MachineState::Accept {
            return Err(VendingError::invalid_state("dispense", self.state));
        }

        // Phase 1: validate everything without touching state.
        let plan = self.inventory.plan(selections)?;

        if self.balance < plan.total_cost {
            return Err(VendingError::insufficient_balance(
                self.balance,
                plan.total_cost,
            ));
        }

        // Phase 2: commit balance and inventory together.
        self.balance -= plan.total_cost;
        self.inventory.commit(&plan);

        if self.balance < self.config.low_balance_cutoff {
            self.state = MachineState::Idle;
        }

        Ok(DispenseReceipt {
            dispensed: plan
                .lines
                .iter()
                .map(|(drink, quantity)| Selection::new(drink.clone(), *quantity))
                .collect(),
            total_cost: plan.total_cost,
            balance: self.balance,
        })
    }

    /// Withdraw the remaining balance
    ///
    /// Legal only in Accept. Zeroes the balance and returns the machine to
    /// Idle.
    ///
    /// # Returns
    ///
    /// * `Ok(Shillings)` - The withdrawn amount
    /// * `Err(VendingError)` - If the state forbids withdrawing or there is
    ///   nothing to withdraw
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The machine is not in Accept (`InvalidState`)
    /// - The balance is zero (`NoBalance`); the state is left unchanged
    pub fn withdraw(&mut self) -> Result<Shillings, VendingError> {
        if self.state != MachineState::Accept {
            return Err(VendingError::invalid_state("withdraw", self.state));
        }

        if self.balance == 0 {
            return Err(VendingError::NoBalance);
        }

        let withdrawn = self.balance;
        self.balance = 0;
        self.state = MachineState::Idle;

        Ok(withdrawn)
    }

    /// Restore the machine to its initial state
    ///
    /// Legal in every state and always succeeds: balance to zero, full stock
    /// restored, dispensed ledger cleared, state to Idle.
    pub fn reset(&mut self) {
        self.balance = 0;
        self.inventory.restock();
        self.state = MachineState::Idle;
    }

    /// Current balance in shillings
    pub fn balance(&self) -> Shillings {
        self.balance
    }

    /// Current machine state
    pub fn state(&self) -> MachineState {
        self.state
    }

    /// Whether a drink can currently be selected (available > 0)
    pub fn is_selectable(&self, drink: &str) -> bool {
        self.inventory.is_selectable(drink)
    }

    /// Units of a drink still available, if the catalog carries it
    pub fn available(&self, drink: &str) -> Option<Quantity> {
        self.inventory.available(drink)
    }

    /// Units of a drink dispensed since the last reset, if the catalog
    /// carries it
    pub fn dispensed(&self, drink: &str) -> Option<Quantity> {
        self.inventory.dispensed(drink)
    }

    /// Stock report for all drinks, sorted by name
    pub fn report(&self) -> Vec<StockReport> {
        self.inventory.report()
    }

    /// The machine configuration
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}
