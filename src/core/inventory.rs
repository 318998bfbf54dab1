//! Inventory ledger
//!
//! This module provides the `Inventory` component which tracks, per drink,
//! the unit price, the units still available, and the units dispensed since
//! the last reset.
//!
//! The Inventory is responsible for:
//! - Planning a dispense (validating a selection and computing its cost)
//! - Committing a planned dispense (decrementing stock, crediting the ledger)
//! - Restoring full stock on reset
//! - Providing sorted stock listings for output
//!
//! # Two-Phase Dispense
//!
//! Dispensing is split into `plan` (pure validation, no mutation) and
//! `commit` (mutation only after the whole request has been validated). A
//! rejected dispense therefore never leaves a partial stock decrement behind,
//! and `available + dispensed == initial_stock` holds at all times.

use crate::types::{DrinkConfig, Quantity, Selection, Shillings, VendingError};
use std::collections::HashMap;

/// Per-drink stock state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockEntry {
    /// Unit price in shillings
    pub price: Shillings,

    /// Units loaded at startup, restored by reset
    pub initial_stock: Quantity,

    /// Units currently available for dispensing
    pub available: Quantity,

    /// Units dispensed since the last reset (audit only)
    pub dispensed: Quantity,
}

/// One row of the stock report, sorted output form of a [`StockEntry`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockReport {
    /// Drink name
    pub drink: String,

    /// Unit price in shillings
    pub price: Shillings,

    /// Units currently available
    pub available: Quantity,

    /// Units dispensed since the last reset
    pub dispensed: Quantity,

    /// Whether the drink can currently be selected (available > 0)
    pub selectable: bool,
}

/// A validated dispense, ready to commit
///
/// Produced by [`Inventory::plan`]; quantities are aggregated per drink and
/// already checked against stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispensePlan {
    /// Total cost of the planned dispense
    pub total_cost: Shillings,

    /// Aggregated (drink, quantity) lines, in first-appearance order
    pub lines: Vec<(String, Quantity)>,
}

/// Inventory ledger for the drink catalog
///
/// Maintains a map of drink name to stock state. Mutated only by `commit`
/// (successful dispense) and `restock` (reset).
pub struct Inventory {
    /// Map of drink name to stock state
    entries: HashMap<String, StockEntry>,
}

impl Inventory {
    /// Create an inventory from the configured drink catalog
    ///
    /// If the catalog lists the same drink twice, the first occurrence wins.
    pub fn new(drinks: &[DrinkConfig]) -> Self {
        let mut entries = HashMap::new();
        for drink in drinks {
            entries
                .entry(drink.drink.clone())
                .or_insert_with(|| StockEntry {
                    price: drink.price,
                    initial_stock: drink.stock,
                    available: drink.stock,
                    dispensed: 0,
                });
        }
        Inventory { entries }
    }

    /// Unit price of a drink, if the catalog carries it
    pub fn price_of(&self, drink: &str) -> Option<Shillings> {
        self.entries.get(drink).map(|entry| entry.price)
    }

    /// Units currently available for a drink, if the catalog carries it
    pub fn available(&self, drink: &str) -> Option<Quantity> {
        self.entries.get(drink).map(|entry| entry.available)
    }

    /// Units dispensed since the last reset, if the catalog carries it
    pub fn dispensed(&self, drink: &str) -> Option<Quantity> {
        self.entries.get(drink).map(|entry| entry.dispensed)
    }

    /// Whether a drink can currently be selected
    ///
    /// Unknown drinks are not selectable.
    pub fn is_selectable(&self, drink: &str) -> bool {
        self.available(drink).is_some_and(|available| available > 0)
    }

    /// Validate a selection and compute its total cost, without mutating
    ///
    /// Quantities for the same drink are aggregated across selection lines
    /// before the stock check, so a selection cannot slip past the check by
    /// splitting one drink over several lines.
    ///
    /// # Arguments
    ///
    /// * `selections` - The requested (drink, quantity) lines
    ///
    /// # Returns
    ///
    /// * `Ok(DispensePlan)` - Aggregated lines and total cost
    /// * `Err(VendingError)` - If a drink is unknown or stock is insufficient
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A selection names a drink not in the catalog (`UnknownDrink`)
    /// - The aggregate quantity for a drink exceeds its available stock
    ///   (`OutOfStock`)
    pub fn plan(&self, selections: &[Selection]) -> Result<DispensePlan, VendingError> {
        // Aggregate quantities per drink, keeping first-appearance order
        // for deterministic error reporting and receipts.
        let mut totals: HashMap<&str, Quantity> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();

        for selection in selections {
            if !self.entries.contains_key(selection.drink.as_str()) {
                return Err(VendingError::unknown_drink(&selection.drink));
            }
            let total = totals.entry(selection.drink.as_str()).or_insert_with(|| {
                order.push(selection.drink.as_str());
                0
            });
            *total += selection.quantity;
        }

        let mut total_cost: Shillings = 0;
        let mut lines = Vec::with_capacity(order.len());

        for drink in order {
            let quantity = totals[drink];
            let entry = &self.entries[drink];

            if quantity > entry.available {
                return Err(VendingError::out_of_stock(drink, entry.available, quantity));
            }

            total_cost += entry.price * Shillings::from(quantity);
            lines.push((drink.to_string(), quantity));
        }

        Ok(DispensePlan { total_cost, lines })
    }

    /// Commit a planned dispense
    ///
    /// Decrements available stock and credits the dispensed ledger for every
    /// line of the plan. The plan must come from [`Inventory::plan`] on this
    /// inventory, so the quantities are known to be in stock.
    pub fn commit(&mut self, plan: &DispensePlan) {
        for (drink, quantity) in &plan.lines {
            if let Some(entry) = self.entries.get_mut(drink) {
                entry.available -= quantity;
                entry.dispensed += quantity;
            }
        }
    }

    /// Restore full stock and clear the dispensed ledger (reset)
    pub fn restock(&mut self) {
        for entry in self.entries.values_mut() {
            entry.available = entry.initial_stock;
            entry.dispensed = 0;
        }
    }

    /// Get the stock report, sorted by drink name
    ///
    /// Sorting gives deterministic output for CSV generation.
    pub fn report(&self) -> Vec<StockReport> {
        let mut rows: Vec<StockReport> = self
            .entries
            .iter()
            .map(|(drink, entry)| StockReport {
                drink: drink.clone(),
                price: entry.price,
                available: entry.available,
                dispensed: entry.dispensed,
                selectable: entry.available > 0,
            })
            .collect();
        rows.sort_by(|a, b| a.drink.cmp(&b.drink));
        rows
    }
}
