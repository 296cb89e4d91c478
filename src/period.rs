use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Inclusive date range every period-scoped aggregation resolves against.
///
/// When a caller omits the range, all aggregators default to the current
/// calendar month. Total balances are period-independent and ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ValidationError::InvalidDateRange { start, end }.into());
        }
        Ok(DateRange { start, end })
    }

    /// The calendar month containing `today`.
    pub fn current_month(today: NaiveDate) -> Self {
        let start =
            NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
        let next_month = if today.month() == 12 {
            NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
        };
        let end = next_month
            .map(|d| d - Duration::days(1))
            .unwrap_or(today);
        DateRange { start, end }
    }

    /// Resolves an optional caller-supplied range to concrete bounds.
    pub fn resolve(range: Option<DateRange>, today: NaiveDate) -> Self {
        range.unwrap_or_else(|| DateRange::current_month(today))
    }

    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// The immediately preceding period of equal length, used for
    /// period-over-period variance.
    pub fn preceding(&self) -> Self {
        let len = Duration::days(self.len_days());
        DateRange {
            start: self.start - len,
            end: self.start - Duration::days(1),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}
