//! Report service: fetches scoped rows from the stores and hands them to `calc`.

use std::collections::HashMap;
use std::sync::Arc;

use budgetbuddy_shared::types::{CycleMonth, PageRequest, PageResponse, UserId};
use rust_decimal::Decimal;

use super::calc;
use super::error::ReportError;
use super::types::{
    ExpensesByCategory, IncomeVsExpense, MonthSummary, MonthlyClose, ReportPeriod, Summary,
    YearSummary,
};
use crate::budget::{BudgetFilter, BudgetPerformance, BudgetStore};
use crate::category::CategoryStore;
use crate::transaction::{Transaction, TransactionFilter, TransactionStore};

/// Service for generating financial reports.
#[derive(Clone)]
pub struct ReportService {
    transactions: Arc<dyn TransactionStore>,
    budgets: Arc<dyn BudgetStore>,
    categories: Arc<dyn CategoryStore>,
}

impl ReportService {
    /// Creates a service over the given stores.
    #[must_use]
    pub fn new(
        transactions: Arc<dyn TransactionStore>,
        budgets: Arc<dyn BudgetStore>,
        categories: Arc<dyn CategoryStore>,
    ) -> Self {
        Self {
            transactions,
            budgets,
            categories,
        }
    }

    /// Month totals, or a twelve-month breakdown plus year totals.
    pub async fn summary(
        &self,
        user_id: UserId,
        period: ReportPeriod,
    ) -> Result<Summary, ReportError> {
        let transactions = self.in_period(user_id, period).await?;

        Ok(match period {
            ReportPeriod::Month(month) => Summary::Month(MonthSummary {
                month,
                totals: calc::totals(&transactions),
            }),
            ReportPeriod::Year(year) => Summary::Year(YearSummary {
                year,
                monthly_breakdown: calc::monthly_breakdown(year, &transactions),
                year_totals: calc::totals(&transactions),
            }),
        })
    }

    /// Income against expense at the period's granularity.
    pub async fn income_vs_expense(
        &self,
        user_id: UserId,
        period: ReportPeriod,
    ) -> Result<IncomeVsExpense, ReportError> {
        let totals = calc::totals(&self.in_period(user_id, period).await?);

        Ok(IncomeVsExpense {
            period,
            income: totals.total_income,
            expense: totals.total_expense,
            net_balance: totals.net_balance,
        })
    }

    /// Expense per category with percentage shares.
    pub async fn expenses_by_category(
        &self,
        user_id: UserId,
        period: ReportPeriod,
    ) -> Result<ExpensesByCategory, ReportError> {
        let transactions = self.in_period(user_id, period).await?;
        let names: HashMap<_, _> = self
            .categories
            .list()
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        let categories = calc::category_breakdown(&transactions, &names);
        let total_expense: Decimal = categories.iter().map(|c| c.amount).sum();

        Ok(ExpensesByCategory {
            period,
            total_expense,
            categories,
        })
    }

    /// Month totals plus budget performance for `month`.
    pub async fn monthly_close(
        &self,
        user_id: UserId,
        month: CycleMonth,
    ) -> Result<MonthlyClose, ReportError> {
        let totals = calc::totals(&self.in_period(user_id, ReportPeriod::Month(month)).await?);
        let budgets = self
            .budgets
            .find_by_user(user_id, &BudgetFilter::month(month))
            .await?;
        let total_budgeted: Decimal = budgets.iter().map(|b| b.budget_amount).sum();

        Ok(MonthlyClose {
            month,
            totals,
            budget_count: budgets.len() as u64,
            budget_performance: BudgetPerformance::new(total_budgeted, totals.total_expense),
        })
    }

    /// One page of the user's transactions, newest first.
    ///
    /// # Errors
    ///
    /// `InvalidPagination` when `page` or `limit` is zero.
    pub async fn recent_transactions(
        &self,
        user_id: UserId,
        page: u32,
        limit: u32,
    ) -> Result<PageResponse<Transaction>, ReportError> {
        if page == 0 {
            return Err(ReportError::InvalidPagination { field: "page" });
        }
        if limit == 0 {
            return Err(ReportError::InvalidPagination { field: "limit" });
        }

        let request = PageRequest::new(page, limit);
        let (items, total) = self.transactions.page_by_user(user_id, request).await?;
        Ok(PageResponse::new(items, request.page, request.per_page, total))
    }

    async fn in_period(
        &self,
        user_id: UserId,
        period: ReportPeriod,
    ) -> Result<Vec<Transaction>, ReportError> {
        let (from, to) = period.date_range();
        Ok(self
            .transactions
            .find_by_user(user_id, &TransactionFilter::between(from, to))
            .await?)
    }
}
