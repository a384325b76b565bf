//! Report data types.

use budgetbuddy_shared::types::{CategoryId, CycleMonth};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::error::ReportError;
use crate::budget::BudgetPerformance;

/// The span a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "granularity", content = "value", rename_all = "lowercase")]
pub enum ReportPeriod {
    /// A single calendar month.
    Month(CycleMonth),
    /// A whole calendar year.
    Year(i32),
}

impl ReportPeriod {
    /// Resolves `?month=` / `?year=` query values.
    ///
    /// `month` wins when both are given; with neither, the month containing
    /// `today` is used.
    ///
    /// # Errors
    ///
    /// `InvalidMonth` or `InvalidYear` for malformed values.
    pub fn resolve(
        month: Option<&str>,
        year: Option<&str>,
        today: NaiveDate,
    ) -> Result<Self, ReportError> {
        if let Some(month) = month {
            return Ok(Self::Month(month.parse()?));
        }
        if let Some(year) = year {
            return parse_year(year).map(Self::Year);
        }
        Ok(Self::Month(CycleMonth::from_date(today)))
    }

    /// First and last day covered, inclusive.
    #[must_use]
    pub fn date_range(self) -> (NaiveDate, NaiveDate) {
        match self {
            Self::Month(month) => (month.first_day(), month.last_day()),
            Self::Year(year) => (
                NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN),
                NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(NaiveDate::MAX),
            ),
        }
    }
}

impl std::fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Month(month) => write!(f, "{month}"),
            Self::Year(year) => write!(f, "{year:04}"),
        }
    }
}

fn parse_year(raw: &str) -> Result<i32, ReportError> {
    let year: i32 = raw
        .trim()
        .parse()
        .map_err(|_| ReportError::InvalidYear(raw.to_string()))?;
    if !(1..=9999).contains(&year) {
        return Err(ReportError::InvalidYear(raw.to_string()));
    }
    Ok(year)
}

/// Income, expense and their difference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PeriodTotals {
    /// Sum of income transactions.
    pub total_income: Decimal,
    /// Sum of expense transactions.
    pub total_expense: Decimal,
    /// `total_income - total_expense`.
    pub net_balance: Decimal,
}

/// Totals for one month of a yearly breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyTotals {
    /// The month.
    pub month: CycleMonth,
    /// Its totals.
    #[serde(flatten)]
    pub totals: PeriodTotals,
}

/// Summary of a single month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    /// The month.
    pub month: CycleMonth,
    /// Its totals.
    #[serde(flatten)]
    pub totals: PeriodTotals,
}

/// Summary of a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearSummary {
    /// The year.
    pub year: i32,
    /// Always twelve entries, January first.
    pub monthly_breakdown: Vec<MonthlyTotals>,
    /// Totals over the whole year.
    pub year_totals: PeriodTotals,
}

/// Result of a summary report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Summary {
    /// Month granularity.
    Month(MonthSummary),
    /// Year granularity.
    Year(YearSummary),
}

/// Income against expense for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IncomeVsExpense {
    /// The period covered.
    pub period: ReportPeriod,
    /// Sum of income.
    pub income: Decimal,
    /// Sum of expense.
    pub expense: Decimal,
    /// `income - expense`.
    pub net_balance: Decimal,
}

/// One category's share of a period's expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryExpense {
    /// Category ID.
    pub category_id: CategoryId,
    /// Category name, empty if the category no longer exists.
    pub category_name: String,
    /// Expense in this category.
    pub amount: Decimal,
    /// Share of the period's expense, rounded to 2 dp.
    pub percent: Decimal,
}

/// Expense breakdown by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpensesByCategory {
    /// The period covered.
    pub period: ReportPeriod,
    /// Total expense in the period.
    pub total_expense: Decimal,
    /// Largest amount first.
    pub categories: Vec<CategoryExpense>,
}

/// Month-end close: totals plus how spending compared with the budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyClose {
    /// The month.
    pub month: CycleMonth,
    /// Its totals.
    #[serde(flatten)]
    pub totals: PeriodTotals,
    /// Number of budgets in the month.
    pub budget_count: u64,
    /// Budget versus actual.
    pub budget_performance: BudgetPerformance,
}
