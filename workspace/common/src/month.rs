use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Earliest month cashback history is kept for.
pub const EARLIEST_YEAR: i32 = 2020;
pub const EARLIEST_MONTH: u32 = 1;

/// A calendar month without a day component.
///
/// Ordering is chronological (year first, then month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub struct YearMonth {
    /// Four digit year (e.g. 2024)
    pub year: i32,
    /// Month of the year (1-12)
    pub month: u32,
}

impl YearMonth {
    /// Creates a month, returning `None` when `month` is not within 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        // Also rejects years chrono cannot represent
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// Discards the day of `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing today's date on the local clock.
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn earliest() -> Self {
        Self {
            year: EARLIEST_YEAR,
            month: EARLIEST_MONTH,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.succ()
            .first_day()
            .pred_opt()
            .unwrap_or(NaiveDate::MAX)
    }

    /// Returns true when `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The following month.
    pub fn succ(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    /// The preceding month.
    pub fn pred(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// Full month name followed by the four digit year, e.g. "March 2024".
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// Short month name, e.g. "Mar". Used by the month picker grid.
    pub fn short_name(&self) -> String {
        self.first_day().format("%b").to_string()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

/// Inclusive range of months a user may look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBounds {
    pub earliest: YearMonth,
    pub latest: YearMonth,
}

impl MonthBounds {
    pub fn new(earliest: YearMonth, latest: YearMonth) -> Self {
        if earliest <= latest {
            Self { earliest, latest }
        } else {
            Self { earliest: latest, latest: earliest }
        }
    }

    /// January 2020 up to and including the month of `today`.
    pub fn until(today: NaiveDate) -> Self {
        Self::new(YearMonth::earliest(), YearMonth::from_date(today))
    }

    /// January 2020 up to and including the current month.
    pub fn current() -> Self {
        Self::until(Local::now().date_naive())
    }

    pub fn contains(&self, month: YearMonth) -> bool {
        month >= self.earliest && month <= self.latest
    }

    pub fn clamp(&self, month: YearMonth) -> YearMonth {
        month.clamp(self.earliest, self.latest)
    }

    /// Selectable years in ascending order.
    pub fn years(&self) -> Vec<i32> {
        (self.earliest.year..=self.latest.year).collect()
    }

    /// Selectable months of `year`; empty when the year is out of range.
    pub fn months_in(&self, year: i32) -> Vec<YearMonth> {
        (1..=12)
            .filter_map(|month| YearMonth::new(year, month))
            .filter(|m| self.contains(*m))
            .collect()
    }
}

impl Default for MonthBounds {
    fn default() -> Self {
        Self::current()
    }
}
