//! CLI commands for summaries, rankings and charts
//!
//! Every handler loads the full store, aggregates it and returns the text to
//! print, so the interactive menu and the subcommands share one code path.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::display::{render_chart, ChartKind};
use crate::error::{TrackerError, TrackerResult};
use crate::models::Granularity;
use crate::reports::{CategoryRanking, PeriodSummary};
use crate::services::ExpenseService;
use crate::storage::ExpenseStore;

/// Summary period accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PeriodArg {
    #[value(aliases = ["daily", "d"])]
    Day,
    #[value(aliases = ["weekly", "w"])]
    Week,
    #[value(aliases = ["monthly", "m"])]
    Month,
}

impl PeriodArg {
    /// Resolve to a granularity, taking the week start from settings
    pub fn granularity(self, settings: &Settings) -> Granularity {
        match self {
            Self::Day => Granularity::Day,
            Self::Week => Granularity::Week(settings.week_start()),
            Self::Month => Granularity::Month,
        }
    }
}

/// Arguments for `expenses summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Bucket size: day, week or month
    pub period: PeriodArg,

    /// Show a bordered table with counts
    #[arg(short, long)]
    pub table: bool,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `expenses top`
#[derive(Args, Debug)]
pub struct TopArgs {
    /// Show only the first N categories
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Show a bordered table with counts
    #[arg(short, long)]
    pub table: bool,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `expenses summary`
pub fn handle_summary_command(
    store: &ExpenseStore,
    settings: &Settings,
    args: SummaryArgs,
) -> TrackerResult<String> {
    let granularity = args.period.granularity(settings);

    if let Some(path) = args.output {
        let expenses = ExpenseService::new(store).list()?;
        let summary = PeriodSummary::generate(&expenses, granularity);
        summary.export_csv(create_output(&path)?)?;
        return Ok(format!(
            "{} summary exported to: {}\n",
            granularity.name(),
            path.display()
        ));
    }

    summary_report(store, settings, granularity, args.table)
}

/// Handle `expenses top`
pub fn handle_top_command(
    store: &ExpenseStore,
    settings: &Settings,
    args: TopArgs,
) -> TrackerResult<String> {
    if let Some(path) = args.output {
        let expenses = ExpenseService::new(store).list()?;
        CategoryRanking::generate(&expenses).export_csv(create_output(&path)?)?;
        return Ok(format!("Category ranking exported to: {}\n", path.display()));
    }

    ranking_report(store, settings, args.limit, args.table)
}

/// Totals per time bucket, or a notice when there is nothing stored
pub fn summary_report(
    store: &ExpenseStore,
    settings: &Settings,
    granularity: Granularity,
    table: bool,
) -> TrackerResult<String> {
    let expenses = ExpenseService::new(store).list()?;
    let summary = PeriodSummary::generate(&expenses, granularity);
    log::debug!(
        "{} summary: {} expenses in {} buckets",
        granularity.name(),
        expenses.len(),
        summary.rows.len()
    );

    if summary.is_empty() {
        return Ok("No expenses to summarize.\n".to_string());
    }

    Ok(if table {
        summary.format_table(&settings.currency_symbol)
    } else {
        summary.format_terminal(&settings.currency_symbol)
    })
}

/// Categories ranked by total, or a notice when there is nothing stored
pub fn ranking_report(
    store: &ExpenseStore,
    settings: &Settings,
    limit: Option<usize>,
    table: bool,
) -> TrackerResult<String> {
    let expenses = ExpenseService::new(store).list()?;
    let ranking = CategoryRanking::generate(&expenses);
    log::debug!("Ranked {} categories", ranking.rows.len());

    if ranking.is_empty() {
        return Ok("No expenses to analyze.\n".to_string());
    }

    Ok(if table {
        ranking.format_table(&settings.currency_symbol, limit)
    } else {
        ranking.format_terminal(&settings.currency_symbol, limit)
    })
}

/// Category chart of the given kind, or a notice when there is nothing stored
pub fn chart_report(
    store: &ExpenseStore,
    settings: &Settings,
    kind: ChartKind,
) -> TrackerResult<String> {
    let expenses = ExpenseService::new(store).list()?;
    let ranking = CategoryRanking::generate(&expenses);

    if ranking.is_empty() {
        return Ok("No expenses to plot.\n".to_string());
    }

    Ok(render_chart(
        kind,
        &ranking,
        &settings.currency_symbol,
        settings.chart_width,
    ))
}

fn create_output(path: &Path) -> TrackerResult<BufWriter<File>> {
    let file = File::create(path)
        .map_err(|e| TrackerError::Io(format!("Failed to create {}: {}", path.display(), e)))?;
    Ok(BufWriter::new(file))
}
