//! Storage layer for the expense tracker
//!
//! Provides the append-only CSV expense store and first-run initialization.

pub mod expenses;
pub mod init;

pub use expenses::{ExpenseStore, HEADER};
pub use init::initialize_storage;
