//! Period Summary
//!
//! Totals expenses per day, week or month. Buckets without expenses are left
//! out rather than zero-filled.

use std::collections::BTreeMap;
use std::io::Write;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, Expense, Granularity, PeriodBucket};

/// Total for one time bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodTotal {
    pub bucket: PeriodBucket,
    /// Sum of amounts, refunds included, so it may be zero or negative
    pub total: Amount,
    /// Number of expenses in the bucket
    pub count: usize,
}

/// Expense totals per time bucket, oldest first
#[derive(Debug, Clone)]
pub struct PeriodSummary {
    pub granularity: Granularity,
    pub rows: Vec<PeriodTotal>,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Expenses")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
}

/// Group expenses into time buckets and sum each bucket in a single pass
pub fn summarize_by_period(expenses: &[Expense], granularity: Granularity) -> PeriodSummary {
    let mut buckets: BTreeMap<PeriodBucket, (Amount, usize)> = BTreeMap::new();

    for expense in expenses {
        let entry = buckets
            .entry(granularity.bucket_of(expense.date))
            .or_insert((Amount::zero(), 0));
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    let rows = buckets
        .into_iter()
        .map(|(bucket, (total, count))| PeriodTotal {
            bucket,
            total,
            count,
        })
        .collect();

    PeriodSummary { granularity, rows }
}

impl PeriodSummary {
    /// Generate a summary of `expenses` at the given granularity
    pub fn generate(expenses: &[Expense], granularity: Granularity) -> Self {
        summarize_by_period(expenses, granularity)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum over every bucket
    pub fn grand_total(&self) -> Amount {
        self.rows.iter().map(|row| row.total).sum()
    }

    /// One `label: amount` line per bucket under a heading
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = format!("\n--- {} Summary ---\n", self.granularity.name());
        for row in &self.rows {
            output.push_str(&format!(
                "{}: {}\n",
                row.bucket,
                row.total.format_with_symbol(currency_symbol)
            ));
        }
        output
    }

    /// Bordered table with a count column and a grand total row
    pub fn format_table(&self, currency_symbol: &str) -> String {
        let mut rows: Vec<SummaryRow> = self
            .rows
            .iter()
            .map(|row| SummaryRow {
                period: row.bucket.to_string(),
                count: row.count,
                total: row.total.format_with_symbol(currency_symbol),
            })
            .collect();

        rows.push(SummaryRow {
            period: "TOTAL".to_string(),
            count: self.rows.iter().map(|row| row.count).sum(),
            total: self.grand_total().format_with_symbol(currency_symbol),
        });

        Table::new(rows).with(Style::rounded()).to_string()
    }

    /// Export the summary to CSV: period label, start, end, count, exact total
    pub fn export_csv<W: Write>(&self, writer: W) -> TrackerResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["period", "start", "end", "count", "total"])?;

        for row in &self.rows {
            csv_writer.write_record([
                row.bucket.to_string(),
                row.bucket.start_date().to_string(),
                row.bucket.end_date().to_string(),
                row.count.to_string(),
                row.total.to_string(),
            ])?;
        }

        csv_writer
            .flush()
            .map_err(|e| TrackerError::Io(format!("Failed to write summary: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};

    fn expense(date: &str, category: &str, amount: &str) -> Expense {
        Expense::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category,
            "",
            Amount::parse(amount).unwrap(),
        )
    }

    #[test]
    fn test_daily_sums_negative_amounts() {
        let expenses = vec![
            expense("2024-01-01", "Food", "10"),
            expense("2024-01-01", "Food", "-4"),
        ];

        let summary = summarize_by_period(&expenses, Granularity::Day);

        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.rows[0].bucket.to_string(), "2024-01-01");
        assert_eq!(summary.rows[0].total, Amount::from_whole(6));
        assert_eq!(summary.rows[0].count, 2);
    }

    #[test]
    fn test_many_largest_amounts_sum_exactly() {
        let mut expenses = vec![expense("2024-01-01", "Food", "0.000000001")];
        for _ in 0..200 {
            expenses.push(expense("2024-01-01", "Food", "999999999999999.999999999"));
        }

        let summary = summarize_by_period(&expenses, Granularity::Day);

        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.rows[0].count, 201);
        assert_eq!(
            summary.rows[0].total.to_string(),
            "199999999999999999.999999801"
        );
    }

    #[test]
    fn test_empty_input_gives_empty_summary() {
        for granularity in [Granularity::Day, Granularity::weekly(), Granularity::Month] {
            let summary = summarize_by_period(&[], granularity);
            assert!(summary.is_empty());
            assert!(summary.grand_total().is_zero());
        }
    }

    #[test]
    fn test_buckets_are_chronological_and_gaps_omitted() {
        // Backdated entries arrive out of order
        let expenses = vec![
            expense("2024-03-15", "Food", "5"),
            expense("2024-01-10", "Food", "1"),
            expense("2024-03-01", "Travel", "2.5"),
        ];

        let summary = summarize_by_period(&expenses, Granularity::Month);
        let labels: Vec<_> = summary.rows.iter().map(|r| r.bucket.to_string()).collect();

        assert_eq!(labels, vec!["2024-01", "2024-03"]);
        assert_eq!(summary.rows[1].total.to_string(), "7.5");
    }

    #[test]
    fn test_weekly_buckets_close_on_sunday() {
        let expenses = vec![
            expense("2024-01-01", "Food", "1"), // Monday
            expense("2024-01-07", "Food", "2"), // Sunday
            expense("2024-01-08", "Food", "4"), // next Monday
        ];

        let summary = summarize_by_period(&expenses, Granularity::weekly());

        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].bucket.to_string(), "Week 2024-01-07");
        assert_eq!(summary.rows[0].total, Amount::from_whole(3));
        assert_eq!(summary.rows[1].bucket.to_string(), "Week 2024-01-14");
    }

    #[test]
    fn test_weekly_with_sunday_start() {
        let expenses = vec![
            expense("2024-01-06", "Food", "1"), // Saturday
            expense("2024-01-07", "Food", "2"), // Sunday
        ];

        let summary = summarize_by_period(&expenses, Granularity::Week(Weekday::Sun));
        assert_eq!(summary.rows.len(), 2);
    }

    #[test]
    fn test_zero_total_bucket_is_kept() {
        let expenses = vec![
            expense("2024-02-01", "Shop", "25"),
            expense("2024-02-03", "Shop", "-25"),
        ];

        let summary = summarize_by_period(&expenses, Granularity::Month);
        assert_eq!(summary.rows.len(), 1);
        assert!(summary.rows[0].total.is_zero());
    }

    #[test]
    fn test_format_terminal() {
        let expenses = vec![expense("2024-01-01", "Food", "10"), expense("2024-01-02", "Food", "-4")];
        let summary = summarize_by_period(&expenses, Granularity::Day);

        let output = summary.format_terminal("₹");
        assert!(output.contains("--- Daily Summary ---"));
        assert!(output.contains("2024-01-01: ₹10.00\n"));
        assert!(output.contains("2024-01-02: -₹4.00\n"));
    }

    #[test]
    fn test_format_table_has_total_row() {
        let expenses = vec![expense("2024-01-01", "Food", "10"), expense("2024-02-01", "Food", "5")];
        let table = summarize_by_period(&expenses, Granularity::Month).format_table("$");

        assert!(table.contains("Period"));
        assert!(table.contains("2024-02"));
        assert!(table.contains("TOTAL"));
        assert!(table.contains("$15.00"));
    }

    #[test]
    fn test_export_csv() {
        let expenses = vec![expense("2024-01-03", "Food", "10.25")];
        let summary = summarize_by_period(&expenses, Granularity::weekly());

        let mut output = Vec::new();
        summary.export_csv(&mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert_eq!(
            csv_string,
            "period,start,end,count,total\nWeek 2024-01-07,2024-01-01,2024-01-07,1,10.25\n"
        );
    }
}
