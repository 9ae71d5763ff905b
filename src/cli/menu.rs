//! Interactive text menu
//!
//! A blocking read-eval loop over eight numbered actions. Each action runs one
//! core operation to completion and prints its result or error; a failed
//! action never ends the loop.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::ChartKind;
use crate::error::TrackerResult;
use crate::models::{ExpenseInput, Granularity};
use crate::services::ExpenseService;
use crate::storage::ExpenseStore;

use super::expense::format_added;
use super::report::{chart_report, ranking_report, summary_report};

/// One numbered menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    DailySummary,
    WeeklySummary,
    MonthlySummary,
    TopCategories,
    BarChart,
    PieChart,
    Exit,
}

impl MenuChoice {
    /// All entries in menu order
    pub fn all() -> &'static [MenuChoice] {
        &[
            Self::AddExpense,
            Self::DailySummary,
            Self::WeeklySummary,
            Self::MonthlySummary,
            Self::TopCategories,
            Self::BarChart,
            Self::PieChart,
            Self::Exit,
        ]
    }

    /// Parse the number typed at the prompt
    pub fn parse(input: &str) -> Option<Self> {
        let index: usize = input.trim().parse().ok()?;
        index
            .checked_sub(1)
            .and_then(|i| Self::all().get(i))
            .copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddExpense => "Add Expense",
            Self::DailySummary => "Daily Summary",
            Self::WeeklySummary => "Weekly Summary",
            Self::MonthlySummary => "Monthly Summary",
            Self::TopCategories => "Top Spending Categories",
            Self::BarChart => "Show Bar Chart by Category",
            Self::PieChart => "Show Pie Chart by Category",
            Self::Exit => "Exit",
        }
    }
}

/// Interactive menu reading commands from `input` and printing to `output`
pub struct Menu<'a, R, W> {
    store: &'a ExpenseStore,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a ExpenseStore, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            store,
            settings,
            input,
            output,
        }
    }

    /// Run until Exit is chosen or input ends
    pub fn run(&mut self) -> TrackerResult<()> {
        if let Err(e) = self.store.ensure_initialized() {
            log::warn!("Could not initialize store: {}", e);
            writeln!(self.output, "Error: {}", e)?;
        }

        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter your choice (1-8): ")? else {
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };

            match self.perform(choice) {
                Ok(Some(text)) => write!(self.output, "{}", text)?,
                Ok(None) => break,
                Err(e) => {
                    log::warn!("{} failed: {}", choice.label(), e);
                    writeln!(self.output, "Error: {}", e)?;
                }
            }
        }

        writeln!(self.output, "Exiting Expense Tracker...")?;
        Ok(())
    }

    /// Run one action; `None` ends the loop (Exit, or input ended while prompting)
    fn perform(&mut self, choice: MenuChoice) -> TrackerResult<Option<String>> {
        let week = Granularity::Week(self.settings.week_start());
        let text = match choice {
            MenuChoice::AddExpense => return self.add_expense(),
            MenuChoice::DailySummary => {
                summary_report(self.store, self.settings, Granularity::Day, false)?
            }
            MenuChoice::WeeklySummary => summary_report(self.store, self.settings, week, false)?,
            MenuChoice::MonthlySummary => {
                summary_report(self.store, self.settings, Granularity::Month, false)?
            }
            MenuChoice::TopCategories => ranking_report(self.store, self.settings, None, false)?,
            MenuChoice::BarChart => chart_report(self.store, self.settings, ChartKind::Bar)?,
            MenuChoice::PieChart => chart_report(self.store, self.settings, ChartKind::Pie)?,
            MenuChoice::Exit => return Ok(None),
        };
        Ok(Some(text))
    }

    fn add_expense(&mut self) -> TrackerResult<Option<String>> {
        writeln!(self.output, "\n--- Add Expense ---")?;

        let Some(date) = self.prompt("Enter date (YYYY-MM-DD) or leave blank for today: ")?
        else {
            return Ok(None);
        };
        let Some(category) = self.prompt("Enter category (e.g., Food, Transport, Bills): ")?
        else {
            return Ok(None);
        };
        let Some(description) = self.prompt("Enter description: ")? else {
            return Ok(None);
        };
        let Some(amount) = self.prompt("Enter amount: ")? else {
            return Ok(None);
        };

        let input = ExpenseInput {
            date,
            category,
            description,
            amount,
        };
        let expense = ExpenseService::new(self.store).add(&input)?;
        Ok(Some(format_added(&expense)))
    }

    fn print_menu(&mut self) -> TrackerResult<()> {
        writeln!(self.output, "\n===== Personal Expense Tracker =====")?;
        for (i, choice) in MenuChoice::all().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice.label())?;
        }
        Ok(())
    }

    /// Print `text` and read one line; `None` at end of input
    fn prompt(&mut self, text: &str) -> TrackerResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\n', '\r'][..]).to_string()))
    }
}
