//! Service layer for the expense tracker
//!
//! Sits between the command handlers and the store.

pub mod expense;

pub use expense::ExpenseService;
