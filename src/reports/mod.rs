//! Reports module for the expense tracker
//!
//! Aggregations over the loaded expense table: totals per time period and
//! totals per category.

pub mod category_ranking;
pub mod period_summary;

pub use category_ranking::{rank_by_category, CategoryRanking, CategoryTotal};
pub use period_summary::{summarize_by_period, PeriodSummary, PeriodTotal};
