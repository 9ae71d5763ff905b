//! Display formatting for terminal output
//!
//! Text charts and the small formatting helpers they share.

pub mod chart;
pub mod report;

pub use chart::{bar_chart, pie_chart, render_chart, ChartKind};
