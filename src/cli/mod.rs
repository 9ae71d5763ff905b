//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod menu;
pub mod report;

pub use expense::{handle_add_command, AddArgs};
pub use menu::{Menu, MenuChoice};
pub use report::{
    chart_report, handle_summary_command, handle_top_command, ranking_report, summary_report,
    PeriodArg, SummaryArgs, TopArgs,
};
