//! Budget routes: CRUD, spending per month and the overview.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use budgetbuddy_core::budget::{
    Budget, BudgetError, BudgetFilter, BudgetOverview, BudgetWithSpending, CreateBudgetInput,
    UpdateBudgetInput,
};
use budgetbuddy_shared::AppError;
use budgetbuddy_shared::types::{BudgetId, CategoryId};
use serde::Deserialize;
use tracing::info;

use crate::{
    AppState,
    error::ApiResult,
    extractors::{JsonBody, PathParam, QueryParams},
    middleware::AuthUser,
};

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets", get(list_budgets).post(create_budget))
        .route("/budgets/overview", get(get_overview))
        .route("/budgets/spending", get(get_spending))
        .route(
            "/budgets/{budget_id}",
            get(get_budget).put(update_budget).delete(delete_budget),
        )
}

/// Query parameters for listing budgets.
#[derive(Debug, Default, Deserialize)]
pub struct ListBudgetsQuery {
    /// Only this month (YYYY-MM).
    pub cycle_month: Option<String>,
    /// Only this category.
    pub category_id: Option<CategoryId>,
}

/// Query parameters for budget spending.
#[derive(Debug, Default, Deserialize)]
pub struct SpendingQuery {
    /// Month to report (YYYY-MM).
    pub cycle_month: Option<String>,
}

/// GET /budgets
async fn list_budgets(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<ListBudgetsQuery>,
) -> ApiResult<Json<Vec<Budget>>> {
    let filter = BudgetFilter::parse(query.cycle_month.as_deref(), query.category_id)?;
    let budgets = state.budgets.list(auth.user_id(), filter).await?;
    Ok(Json(budgets))
}

/// POST /budgets
async fn create_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<CreateBudgetInput>,
) -> ApiResult<(StatusCode, Json<Budget>)> {
    let budget = state.budgets.create(auth.user_id(), payload).await?;
    info!(
        user_id = %auth.user_id(),
        budget_id = %budget.id,
        category_id = %budget.category_id,
        cycle_month = %budget.cycle_month,
        "Budget created"
    );
    Ok((StatusCode::CREATED, Json(budget)))
}

/// GET /budgets/overview
async fn get_overview(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<BudgetOverview>> {
    Ok(Json(state.budgets.overview(auth.user_id()).await?))
}

/// GET /budgets/spending?cycle_month=YYYY-MM
async fn get_spending(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<SpendingQuery>,
) -> ApiResult<Json<Vec<BudgetWithSpending>>> {
    let cycle_month = query
        .cycle_month
        .ok_or_else(|| AppError::Validation("cycle_month is required".to_string()))?;
    let budgets = state
        .budgets
        .with_spending(auth.user_id(), &cycle_month)
        .await?;
    Ok(Json(budgets))
}

/// GET /budgets/{budget_id}
async fn get_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(budget_id): PathParam<BudgetId>,
) -> ApiResult<Json<Budget>> {
    Ok(Json(state.budgets.get(budget_id, auth.user_id()).await?))
}

/// PUT /budgets/{budget_id}
async fn update_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(budget_id): PathParam<BudgetId>,
    JsonBody(payload): JsonBody<UpdateBudgetInput>,
) -> ApiResult<Json<Budget>> {
    let budget = state
        .budgets
        .update(budget_id, auth.user_id(), payload)
        .await?;
    info!(user_id = %auth.user_id(), budget_id = %budget.id, "Budget updated");
    Ok(Json(budget))
}

/// DELETE /budgets/{budget_id}
async fn delete_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(budget_id): PathParam<BudgetId>,
) -> ApiResult<StatusCode> {
    if !state.budgets.delete(budget_id, auth.user_id()).await? {
        return Err(BudgetError::NotFound(budget_id).into());
    }
    info!(user_id = %auth.user_id(), budget_id = %budget_id, "Budget deleted");
    Ok(StatusCode::NO_CONTENT)
}
