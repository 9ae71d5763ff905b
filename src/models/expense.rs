//! Expense model and input validation
//!
//! An expense is one dated entry in the store. Raw user input is turned into an
//! [`Expense`] through [`ExpenseInput::validate`]; nothing reaches storage
//! without passing through it.

use chrono::NaiveDate;
use std::fmt;

use super::amount::Amount;
use crate::error::{TrackerError, TrackerResult};

/// Date format used for input, storage and daily labels
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Calendar date of the expense
    pub date: NaiveDate,
    /// Category label, compared exactly when grouping
    pub category: String,
    /// Free-form description
    pub description: String,
    /// Amount spent; negative for refunds or corrections
    pub amount: Amount,
}

impl Expense {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            description: description.into(),
            amount,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} {}",
            self.date.format(DATE_FORMAT),
            self.category,
            self.description,
            self.amount
        )
    }
}

/// Raw text fields for a new expense, as typed by the user
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    /// `YYYY-MM-DD`, or empty for today
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: String,
}

impl ExpenseInput {
    /// Validate against the local calendar date
    pub fn validate(&self) -> TrackerResult<Expense> {
        self.validate_on(chrono::Local::now().date_naive())
    }

    /// Validate, substituting `today` for an empty date
    ///
    /// The date is checked before the amount, so input with both wrong
    /// reports `InvalidDate`.
    pub fn validate_on(&self, today: NaiveDate) -> TrackerResult<Expense> {
        let date_text = self.date.trim();
        let date = if date_text.is_empty() {
            today
        } else {
            parse_date(date_text)?
        };

        let amount = Amount::parse(&self.amount)?;

        Ok(Expense {
            date,
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
            amount,
        })
    }
}

/// Parse a strict `YYYY-MM-DD` date
///
/// Rejects shortened forms like `2024-1-5` that chrono alone would accept,
/// as well as dates that do not exist.
pub fn parse_date(text: &str) -> TrackerResult<NaiveDate> {
    let invalid = || TrackerError::InvalidDate(text.to_string());
    let bytes = text.as_bytes();

    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input(date: &str, category: &str, description: &str, amount: &str) -> ExpenseInput {
        ExpenseInput {
            date: date.into(),
            category: category.into(),
            description: description.into(),
            amount: amount.into(),
        }
    }

    #[test]
    fn test_validate_trims_fields() {
        let expense = input(" 2024-03-05 ", "  Food ", " Lunch\t", " 12.50 ")
            .validate_on(date(2000, 1, 1))
            .unwrap();

        assert_eq!(expense.date, date(2024, 3, 5));
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.description, "Lunch");
        assert_eq!(expense.amount.to_string(), "12.50");
    }

    #[test]
    fn test_empty_date_means_today() {
        let today = date(2024, 6, 1);
        let expense = input("", "Food", "", "5").validate_on(today).unwrap();
        assert_eq!(expense.date, today);
    }

    #[test]
    fn test_empty_category_is_accepted() {
        let expense = input("2024-01-01", "   ", "misc", "1")
            .validate_on(date(2024, 1, 1))
            .unwrap();
        assert_eq!(expense.category, "");
    }

    #[test]
    fn test_invalid_dates() {
        for text in ["2024-13-40", "2024-02-30", "2024-1-5", "05/01/2024", "2024-01-01x", "abcd-ef-gh"] {
            let err = parse_date(text).unwrap_err();
            assert!(matches!(err, TrackerError::InvalidDate(_)), "{text:?}");
        }
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(parse_date("2024-02-29").unwrap(), date(2024, 2, 29));
        assert!(parse_date("2023-02-29").is_err());
    }

    #[test]
    fn test_invalid_amount() {
        let err = input("2024-01-01", "Food", "", "12.3.4")
            .validate_on(date(2024, 1, 1))
            .unwrap_err();
        assert!(matches!(err, TrackerError::InvalidAmount(_)));

        let err = input("2024-01-01", "Food", "", "")
            .validate_on(date(2024, 1, 1))
            .unwrap_err();
        assert!(matches!(err, TrackerError::InvalidAmount(_)));
    }

    #[test]
    fn test_date_checked_before_amount() {
        let err = input("2024-13-40", "Food", "", "12.3.4")
            .validate_on(date(2024, 1, 1))
            .unwrap_err();
        assert!(matches!(err, TrackerError::InvalidDate(_)));
    }

    #[test]
    fn test_negative_amount_is_kept() {
        let expense = input("2024-01-01", "Refund", "returned shoes", "-40")
            .validate_on(date(2024, 1, 1))
            .unwrap();
        assert!(expense.amount.is_negative());
    }
}
