//! Budget cycle months in `YYYY-MM` form.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static CYCLE_MONTH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}$").expect("valid cycle month pattern"));

/// Errors produced when parsing a cycle month.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleMonthError {
    /// The value is not in `YYYY-MM` form.
    #[error("cycle_month must be in YYYY-MM format, got '{0}'")]
    Format(String),

    /// The month part is outside 01-12.
    #[error("cycle_month month must be between 01 and 12, got '{0}'")]
    MonthOutOfRange(String),
}

/// A budget period identifier such as `2024-01`.
///
/// Ordering follows the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CycleMonth {
    year: i32,
    month: u32,
}

impl CycleMonth {
    /// Creates a cycle month from its parts.
    ///
    /// # Errors
    ///
    /// Returns `CycleMonthError::MonthOutOfRange` if `month` is not 1-12.
    pub fn new(year: i32, month: u32) -> Result<Self, CycleMonthError> {
        if !(1..=12).contains(&month) || !(0..=9999).contains(&year) {
            return Err(CycleMonthError::MonthOutOfRange(format!(
                "{year:04}-{month:02}"
            )));
        }
        Ok(Self { year, month })
    }

    /// The cycle month a calendar date falls in.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Calendar month, 1-12.
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// First day of the month.
    #[must_use]
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month.
    #[must_use]
    pub fn last_day(self) -> NaiveDate {
        self.next().first_day().pred_opt().unwrap_or(NaiveDate::MAX)
    }

    /// The following month.
    #[must_use]
    pub const fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Whether `date` falls within this month.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// All twelve months of `year`, January first.
    pub fn months_of_year(year: i32) -> impl Iterator<Item = Self> {
        (1..=12).map(move |month| Self { year, month })
    }
}

impl std::fmt::Display for CycleMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for CycleMonth {
    type Err = CycleMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !CYCLE_MONTH_PATTERN.is_match(s) {
            return Err(CycleMonthError::Format(s.to_string()));
        }

        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| CycleMonthError::Format(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| CycleMonthError::Format(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| CycleMonthError::Format(s.to_string()))?;

        Self::new(year, month)
    }
}

impl TryFrom<String> for CycleMonth {
    type Error = CycleMonthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CycleMonth> for String {
    fn from(value: CycleMonth) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "month_tests.rs"]
mod tests;
