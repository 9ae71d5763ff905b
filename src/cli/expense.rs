//! CLI command for adding expenses

use clap::Args;

use crate::error::TrackerResult;
use crate::models::{Expense, ExpenseInput, DATE_FORMAT};
use crate::services::ExpenseService;
use crate::storage::ExpenseStore;

/// Arguments for `expenses add`
#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Amount spent (negative for refunds), e.g. 250 or -10.50
    #[arg(allow_negative_numbers = true)]
    pub amount: String,

    /// Category, e.g. Food, Transport, Bills
    #[arg(short, long, default_value = "")]
    pub category: String,

    /// Description
    #[arg(long, alias = "desc", default_value = "")]
    pub description: String,

    /// Expense date (YYYY-MM-DD), today if omitted
    #[arg(short, long, default_value = "")]
    pub date: String,
}

impl From<AddArgs> for ExpenseInput {
    fn from(args: AddArgs) -> Self {
        ExpenseInput {
            date: args.date,
            category: args.category,
            description: args.description,
            amount: args.amount,
        }
    }
}

/// Handle `expenses add`
pub fn handle_add_command(store: &ExpenseStore, args: AddArgs) -> TrackerResult<String> {
    let expense = ExpenseService::new(store).add(&args.into())?;
    Ok(format_added(&expense))
}

/// Confirmation printed after an expense is stored
pub fn format_added(expense: &Expense) -> String {
    let mut output = String::from("Expense added successfully!\n");
    output.push_str(&format!("  Date:        {}\n", expense.date.format(DATE_FORMAT)));
    output.push_str(&format!("  Category:    {}\n", expense.category));
    if !expense.description.is_empty() {
        output.push_str(&format!("  Description: {}\n", expense.description));
    }
    output.push_str(&format!("  Amount:      {}\n", expense.amount));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_handle_add_command() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.csv"));

        let args = AddArgs {
            amount: "-12".into(),
            category: " Refund ".into(),
            description: String::new(),
            date: "2024-02-02".into(),
        };
        let output = handle_add_command(&store, args).unwrap();

        assert!(output.contains("Expense added successfully!"));
        assert!(output.contains("Amount:      -12.0"));
        assert!(!output.contains("Description"));
        assert_eq!(store.load_all().unwrap()[0].category, "Refund");
    }
}
