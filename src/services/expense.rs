//! Expense service
//!
//! Business logic on top of the store: adding validated expenses and loading
//! the full table for reports.

use chrono::NaiveDate;

use crate::error::TrackerResult;
use crate::models::{Expense, ExpenseInput};
use crate::storage::ExpenseStore;

/// Service for recording and listing expenses
pub struct ExpenseService<'a> {
    store: &'a ExpenseStore,
}

impl<'a> ExpenseService<'a> {
    pub fn new(store: &'a ExpenseStore) -> Self {
        Self { store }
    }

    /// Validate raw input and append it, using today's local date if none given
    ///
    /// On a validation error nothing is written.
    pub fn add(&self, input: &ExpenseInput) -> TrackerResult<Expense> {
        let expense = input.validate()?;
        self.store.append(&expense)?;
        Ok(expense)
    }

    /// Same as [`ExpenseService::add`] with an explicit "today"
    pub fn add_on(&self, input: &ExpenseInput, today: NaiveDate) -> TrackerResult<Expense> {
        let expense = input.validate_on(today)?;
        self.store.append(&expense)?;
        Ok(expense)
    }

    /// Every stored expense in storage order
    pub fn list(&self) -> TrackerResult<Vec<Expense>> {
        self.store.load_all()
    }
}
