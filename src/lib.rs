//! Expense Tracker - Terminal-based personal expense tracking
//!
//! This library provides the core functionality for the expense tracker: an
//! append-only CSV store of dated expenses and the summaries, rankings and
//! charts derived from it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expense, exact decimal amount, time buckets
//! - `storage`: Append-only CSV expense store
//! - `services`: Validated expense recording
//! - `reports`: Period summaries and category rankings
//! - `display`: Terminal charts
//! - `cli`: Subcommand handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::config::TrackerPaths;
//! use expense_tracker::models::Granularity;
//! use expense_tracker::reports::summarize_by_period;
//! use expense_tracker::storage::ExpenseStore;
//!
//! let paths = TrackerPaths::new()?;
//! let store = ExpenseStore::new(paths.store_file());
//! let expenses = store.load_all()?;
//! let summary = summarize_by_period(&expenses, Granularity::Month);
//! # Ok::<(), expense_tracker::TrackerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
