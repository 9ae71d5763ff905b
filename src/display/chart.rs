//! Terminal charts for the category ranking
//!
//! Both charts take an already aggregated ranking and only produce text.

use crate::reports::CategoryRanking;

use super::report::{double_separator, format_bar, format_percentage, left_align, truncate};

/// Chart style selectable from the menu and the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ChartKind {
    /// Horizontal bars proportional to each category total
    Bar,
    /// Share of the overall total per category
    Pie,
}

/// Longest category label shown before it is truncated
const MAX_LABEL_WIDTH: usize = 20;

fn label_width(ranking: &CategoryRanking) -> usize {
    ranking
        .rows
        .iter()
        .map(|row| row.label().chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_LABEL_WIDTH)
}

/// Render the chart of the given kind
pub fn render_chart(
    kind: ChartKind,
    ranking: &CategoryRanking,
    currency_symbol: &str,
    width: usize,
) -> String {
    match kind {
        ChartKind::Bar => bar_chart(ranking, currency_symbol, width),
        ChartKind::Pie => pie_chart(ranking, width),
    }
}

/// Bar per category scaled to the largest absolute total
///
/// Negative totals are drawn with the same length rule and flagged with `-`.
pub fn bar_chart(ranking: &CategoryRanking, currency_symbol: &str, width: usize) -> String {
    let label_width = label_width(ranking);
    let max_value = ranking
        .rows
        .iter()
        .map(|row| row.total.abs().to_f64())
        .fold(0.0, f64::max);

    let mut output = String::from("\nExpenses by Category\n");
    output.push_str(&double_separator(label_width + width + 16));
    output.push('\n');

    for row in &ranking.rows {
        let marker = if row.total.is_negative() { '-' } else { ' ' };
        output.push_str(&format!(
            "{} {}{} {}\n",
            left_align(&truncate(row.label(), label_width), label_width),
            marker,
            format_bar(row.total.abs().to_f64(), max_value, width),
            row.total.format_with_symbol(currency_symbol)
        ));
    }

    output
}

/// Share of the positive total per category
///
/// A pie slice cannot be negative or empty, so categories whose total is zero
/// or below are listed separately instead of drawn.
pub fn pie_chart(ranking: &CategoryRanking, width: usize) -> String {
    let label_width = label_width(ranking);
    let (slices, excluded): (Vec<_>, Vec<_>) =
        ranking.rows.iter().partition(|row| row.total.is_positive());
    let total: f64 = slices.iter().map(|row| row.total.to_f64()).sum();

    let mut output = String::from("\nExpenses by Category (share of total)\n");
    output.push_str(&double_separator(label_width + width + 10));
    output.push('\n');

    for row in &slices {
        let share = row.total.to_f64() / total * 100.0;
        output.push_str(&format!(
            "{} {} {}\n",
            left_align(&truncate(row.label(), label_width), label_width),
            format_bar(share, 100.0, width),
            format_percentage(share)
        ));
    }

    if !excluded.is_empty() {
        let names: Vec<_> = excluded.iter().map(|row| row.label()).collect();
        output.push_str(&format!("Not shown (total <= 0): {}\n", names.join(", ")));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Expense};
    use crate::reports::rank_by_category;
    use chrono::NaiveDate;

    fn ranking(entries: &[(&str, &str)]) -> CategoryRanking {
        let expenses: Vec<_> = entries
            .iter()
            .map(|(category, amount)| {
                Expense::new(
                    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    *category,
                    "",
                    Amount::parse(amount).unwrap(),
                )
            })
            .collect();
        rank_by_category(&expenses)
    }

    fn filled(line: &str) -> usize {
        line.chars().filter(|c| *c == '█').count()
    }

    #[test]
    fn test_bar_chart_scales_to_largest() {
        let chart = bar_chart(&ranking(&[("Food", "10"), ("Travel", "5")]), "₹", 10);
        let lines: Vec<_> = chart.lines().filter(|l| l.contains('₹')).collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(filled(lines[0]), 10);
        assert_eq!(filled(lines[1]), 5);
        assert!(lines[0].ends_with("₹10.00"));
    }

    #[test]
    fn test_bar_chart_flags_negative_totals() {
        let chart = bar_chart(&ranking(&[("Food", "10"), ("Refunds", "-10")]), "$", 4);
        let refunds = chart.lines().find(|l| l.starts_with("Refunds")).unwrap();

        assert!(refunds.contains(" -████"));
        assert!(refunds.ends_with("-$10.00"));
    }

    #[test]
    fn test_pie_chart_percentages() {
        let chart = pie_chart(&ranking(&[("Food", "3"), ("Travel", "1")]), 20);

        assert!(chart.contains("75.0%"));
        assert!(chart.contains("25.0%"));
    }

    #[test]
    fn test_pie_chart_excludes_non_positive() {
        let chart = pie_chart(&ranking(&[("Food", "3"), ("Refunds", "-1"), ("Even", "0")]), 20);

        assert!(chart.contains("100.0%"));
        assert!(chart.contains("Not shown (total <= 0): Even, Refunds"));
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let chart = bar_chart(&ranking(&[("A very long category name indeed", "1")]), "$", 5);
        assert!(chart.contains("A very long categ..."));
    }
}
