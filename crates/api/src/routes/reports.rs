//! Report routes.
//!
//! `month` (YYYY-MM) takes precedence over `year` (YYYY); with neither the
//! current month is reported.

use axum::{Json, Router, extract::State, routing::get};
use budgetbuddy_core::reports::{
    ExpensesByCategory, IncomeVsExpense, MonthlyClose, ReportError, ReportPeriod, Summary,
};
use budgetbuddy_core::transaction::Transaction;
use budgetbuddy_shared::types::{CycleMonth, PageResponse};
use chrono::Utc;
use serde::Deserialize;

use crate::{AppState, error::ApiResult, extractors::QueryParams, middleware::AuthUser};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/summary", get(get_summary))
        .route("/reports/income-vs-expense", get(get_income_vs_expense))
        .route("/reports/expenses-by-category", get(get_expenses_by_category))
        .route("/reports/monthly-close", get(get_monthly_close))
        .route("/reports/recent-transactions", get(get_recent_transactions))
}

/// Period selection shared by the report endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct PeriodQuery {
    /// A single month (YYYY-MM).
    pub month: Option<String>,
    /// A whole year (YYYY).
    pub year: Option<String>,
}

impl PeriodQuery {
    fn resolve(&self) -> Result<ReportPeriod, ReportError> {
        ReportPeriod::resolve(
            self.month.as_deref(),
            self.year.as_deref(),
            Utc::now().date_naive(),
        )
    }
}

/// Query parameters for the recent transactions feed.
#[derive(Debug, Default, Deserialize)]
pub struct RecentQuery {
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Page size, capped by configuration.
    pub limit: Option<u32>,
}

/// GET /reports/summary
async fn get_summary(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<PeriodQuery>,
) -> ApiResult<Json<Summary>> {
    let period = query.resolve()?;
    Ok(Json(state.reports.summary(auth.user_id(), period).await?))
}

/// GET /reports/income-vs-expense
async fn get_income_vs_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<PeriodQuery>,
) -> ApiResult<Json<IncomeVsExpense>> {
    let period = query.resolve()?;
    Ok(Json(
        state
            .reports
            .income_vs_expense(auth.user_id(), period)
            .await?,
    ))
}

/// GET /reports/expenses-by-category
async fn get_expenses_by_category(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<PeriodQuery>,
) -> ApiResult<Json<ExpensesByCategory>> {
    let period = query.resolve()?;
    Ok(Json(
        state
            .reports
            .expenses_by_category(auth.user_id(), period)
            .await?,
    ))
}

/// GET /reports/monthly-close
async fn get_monthly_close(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<PeriodQuery>,
) -> ApiResult<Json<MonthlyClose>> {
    let month = match query.month.as_deref() {
        Some(month) => month.parse::<CycleMonth>().map_err(ReportError::from)?,
        None => CycleMonth::from_date(Utc::now().date_naive()),
    };
    Ok(Json(state.reports.monthly_close(auth.user_id(), month).await?))
}

/// GET /reports/recent-transactions
async fn get_recent_transactions(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<RecentQuery>,
) -> ApiResult<Json<PageResponse<Transaction>>> {
    let limit = query
        .limit
        .unwrap_or(state.pagination.default_per_page)
        .min(state.pagination.max_per_page);
    let page = query.page.unwrap_or(1);

    let transactions = state
        .reports
        .recent_transactions(auth.user_id(), page, limit)
        .await?;
    Ok(Json(transactions))
}
