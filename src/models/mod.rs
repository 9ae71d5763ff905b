//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: the exact
//! decimal amount, the expense record with its input validation, and the time
//! buckets used by summaries.

pub mod amount;
pub mod expense;
pub mod period;

pub use amount::Amount;
pub use expense::{parse_date, Expense, ExpenseInput, DATE_FORMAT};
pub use period::{Granularity, PeriodBucket};
