//! Summary period representation
//!
//! Supports daily, weekly and monthly buckets. A bucket is identified by its
//! first day, which gives chronological ordering for free.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;

use super::expense::DATE_FORMAT;

/// How expenses are grouped in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// One bucket per calendar date
    Day,
    /// Seven-day buckets starting on the given weekday
    Week(Weekday),
    /// One bucket per calendar month
    Month,
}

impl Granularity {
    /// Weekly buckets running Monday to Sunday
    pub fn weekly() -> Self {
        Self::Week(Weekday::Mon)
    }

    /// Map a date to the bucket containing it
    pub fn bucket_of(&self, date: NaiveDate) -> PeriodBucket {
        let start = match self {
            Self::Day => date,
            Self::Week(first_day) => {
                let offset = (7 + date.weekday().num_days_from_monday()
                    - first_day.num_days_from_monday())
                    % 7;
                date - Duration::days(i64::from(offset))
            }
            Self::Month => date.with_day(1).unwrap_or(date),
        };
        PeriodBucket {
            granularity: *self,
            start,
        }
    }

    /// Short name used in headings
    pub fn name(&self) -> &'static str {
        match self {
            Self::Day => "Daily",
            Self::Week(_) => "Weekly",
            Self::Month => "Monthly",
        }
    }
}

/// One time bucket, identified by its first day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeriodBucket {
    granularity: Granularity,
    start: NaiveDate,
}

impl PeriodBucket {
    /// First day of the bucket
    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the bucket (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        match self.granularity {
            Granularity::Day => self.start,
            Granularity::Week(_) => self.start + Duration::days(6),
            Granularity::Month => {
                let next_month = if self.start.month() == 12 {
                    NaiveDate::from_ymd_opt(self.start.year() + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(self.start.year(), self.start.month() + 1, 1)
                };
                next_month.map_or(self.start, |d| d - Duration::days(1))
            }
        }
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }
}

impl PartialOrd for PeriodBucket {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PeriodBucket {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.start.cmp(&other.start)
    }
}

/// Day `2024-01-01`, week `Week 2024-01-07` (closing day), month `2024-01`
impl fmt::Display for PeriodBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.granularity {
            Granularity::Day => write!(f, "{}", self.start.format(DATE_FORMAT)),
            Granularity::Week(_) => write!(f, "Week {}", self.end_date().format(DATE_FORMAT)),
            Granularity::Month => write!(f, "{}", self.start.format("%Y-%m")),
        }
    }
}
