//! Category Ranking
//!
//! Totals expenses per category and ranks categories by total, largest first.

use std::collections::BTreeMap;
use std::io::Write;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, Expense};

/// Shown in place of an empty category label
pub const BLANK_CATEGORY_LABEL: &str = "(blank)";

/// Total for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category text exactly as stored
    pub category: String,
    pub total: Amount,
    /// Number of expenses in the category
    pub count: usize,
}

impl CategoryTotal {
    /// Label for display; an empty category is shown as `(blank)`
    pub fn label(&self) -> &str {
        if self.category.is_empty() {
            BLANK_CATEGORY_LABEL
        } else {
            &self.category
        }
    }
}

/// Every category present, ordered by total descending
#[derive(Debug, Clone, Default)]
pub struct CategoryRanking {
    pub rows: Vec<CategoryTotal>,
}

#[derive(Tabled)]
struct RankingRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Expenses")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
}

/// Group expenses by exact category text and rank by summed amount
///
/// Categories are compared byte for byte, so `"Food"` and `"food "` are
/// separate rows. Equal totals keep ascending category order.
pub fn rank_by_category(expenses: &[Expense]) -> CategoryRanking {
    let mut groups: BTreeMap<&str, (Amount, usize)> = BTreeMap::new();

    for expense in expenses {
        let entry = groups
            .entry(expense.category.as_str())
            .or_insert((Amount::zero(), 0));
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    let mut rows: Vec<CategoryTotal> = groups
        .into_iter()
        .map(|(category, (total, count))| CategoryTotal {
            category: category.to_string(),
            total,
            count,
        })
        .collect();

    // Stable sort keeps the alphabetical order among ties
    rows.sort_by(|a, b| b.total.cmp(&a.total));

    CategoryRanking { rows }
}

impl CategoryRanking {
    /// Generate the ranking for `expenses`
    pub fn generate(expenses: &[Expense]) -> Self {
        rank_by_category(expenses)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `limit` categories of the ranking
    pub fn top(&self, limit: usize) -> &[CategoryTotal] {
        &self.rows[..limit.min(self.rows.len())]
    }

    /// Sum over every category
    pub fn grand_total(&self) -> Amount {
        self.rows.iter().map(|row| row.total).sum()
    }

    /// One `category: amount` line per category under a heading
    pub fn format_terminal(&self, currency_symbol: &str, limit: Option<usize>) -> String {
        let rows = self.top(limit.unwrap_or(self.rows.len()));
        let mut output = String::from("\n--- Top Spending Categories ---\n");
        for row in rows {
            output.push_str(&format!(
                "{}: {}\n",
                row.label(),
                row.total.format_with_symbol(currency_symbol)
            ));
        }
        output
    }

    /// Bordered table with rank and count columns
    pub fn format_table(&self, currency_symbol: &str, limit: Option<usize>) -> String {
        let rows: Vec<RankingRow> = self
            .top(limit.unwrap_or(self.rows.len()))
            .iter()
            .enumerate()
            .map(|(i, row)| RankingRow {
                rank: i + 1,
                category: row.label().to_string(),
                count: row.count,
                total: row.total.format_with_symbol(currency_symbol),
            })
            .collect();

        Table::new(rows).with(Style::rounded()).to_string()
    }

    /// Export the ranking to CSV: category, count, exact total
    pub fn export_csv<W: Write>(&self, writer: W) -> TrackerResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["category", "count", "total"])?;

        for row in &self.rows {
            csv_writer.write_record([
                row.category.clone(),
                row.count.to_string(),
                row.total.to_string(),
            ])?;
        }

        csv_writer
            .flush()
            .map_err(|e| TrackerError::Io(format!("Failed to write ranking: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(category: &str, amount: &str) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            category,
            "",
            Amount::parse(amount).unwrap(),
        )
    }

    fn totals(ranking: &CategoryRanking) -> Vec<(&str, Amount)> {
        ranking
            .rows
            .iter()
            .map(|row| (row.category.as_str(), row.total))
            .collect()
    }

    #[test]
    fn test_rank_sums_and_sorts_descending() {
        let expenses = vec![
            expense("Food", "10"),
            expense("Transport", "5"),
            expense("Food", "3"),
        ];

        let ranking = rank_by_category(&expenses);

        assert_eq!(
            totals(&ranking),
            vec![
                ("Food", Amount::from_whole(13)),
                ("Transport", Amount::from_whole(5)),
            ]
        );
        assert_eq!(ranking.rows[0].count, 2);
    }

    #[test]
    fn test_empty_input_gives_empty_ranking() {
        let ranking = rank_by_category(&[]);
        assert!(ranking.is_empty());
        assert!(ranking.top(5).is_empty());
    }

    #[test]
    fn test_categories_are_case_and_whitespace_sensitive() {
        let expenses = vec![expense("Food", "1"), expense("food ", "2"), expense("food", "3")];

        let ranking = rank_by_category(&expenses);
        assert_eq!(ranking.rows.len(), 3);
    }

    #[test]
    fn test_negative_totals_rank_last() {
        let expenses = vec![
            expense("Refunds", "-20"),
            expense("Food", "4"),
            expense("Rent", "0.5"),
        ];

        let ranking = rank_by_category(&expenses);
        let order: Vec<_> = ranking.rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(order, vec!["Food", "Rent", "Refunds"]);
    }

    #[test]
    fn test_ties_are_alphabetical() {
        let expenses = vec![expense("Zoo", "5"), expense("Apples", "5.00"), expense("Mango", "5")];

        let ranking = rank_by_category(&expenses);
        let order: Vec<_> = ranking.rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(order, vec!["Apples", "Mango", "Zoo"]);
    }

    #[test]
    fn test_no_truncation() {
        let expenses: Vec<_> = (0..25)
            .map(|i| expense(&format!("Category {}", i), &i.to_string()))
            .collect();

        let ranking = rank_by_category(&expenses);
        assert_eq!(ranking.rows.len(), 25);
        assert_eq!(ranking.top(3).len(), 3);
        assert_eq!(ranking.top(3)[0].category, "Category 24");
    }

    #[test]
    fn test_blank_category_label() {
        let ranking = rank_by_category(&[expense("", "7")]);
        assert_eq!(ranking.rows[0].category, "");
        assert!(ranking.format_terminal("₹", None).contains("(blank): ₹7.00"));
    }

    #[test]
    fn test_format_table_respects_limit() {
        let expenses = vec![expense("Food", "10"), expense("Transport", "5")];
        let table = rank_by_category(&expenses).format_table("$", Some(1));

        assert!(table.contains("Food"));
        assert!(!table.contains("Transport"));
    }

    #[test]
    fn test_export_csv_quotes_categories() {
        let expenses = vec![expense("Bills, Utilities", "99.90")];

        let mut output = Vec::new();
        rank_by_category(&expenses).export_csv(&mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert_eq!(csv_string, "category,count,total\n\"Bills, Utilities\",1,99.90\n");
    }
}
