//! Transaction routes.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use budgetbuddy_core::transaction::{
    CreateTransactionInput, Transaction, TransactionError, TransactionFilter, TransactionKind,
    UpdateTransactionInput,
};
use budgetbuddy_shared::types::{CategoryId, TransactionId};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::{
    AppState,
    error::ApiResult,
    extractors::{JsonBody, PathParam, QueryParams},
    middleware::AuthUser,
};

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route(
            "/transactions/{transaction_id}",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
}

/// Query parameters for listing transactions.
#[derive(Debug, Default, Deserialize)]
pub struct ListTransactionsQuery {
    /// `income` or `expense`.
    pub kind: Option<TransactionKind>,
    /// Only this category.
    pub category_id: Option<CategoryId>,
    /// Earliest `occurred_on` (YYYY-MM-DD).
    pub from: Option<NaiveDate>,
    /// Latest `occurred_on` (YYYY-MM-DD).
    pub to: Option<NaiveDate>,
}

impl From<ListTransactionsQuery> for TransactionFilter {
    fn from(query: ListTransactionsQuery) -> Self {
        Self {
            kind: query.kind,
            category_id: query.category_id,
            from: query.from,
            to: query.to,
        }
    }
}

/// GET /transactions
async fn list_transactions(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<ListTransactionsQuery>,
) -> ApiResult<Json<Vec<Transaction>>> {
    let transactions = state
        .transactions
        .list(auth.user_id(), query.into())
        .await?;
    Ok(Json(transactions))
}

/// POST /transactions
async fn create_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<CreateTransactionInput>,
) -> ApiResult<(StatusCode, Json<Transaction>)> {
    let transaction = state.transactions.create(auth.user_id(), payload).await?;
    info!(
        user_id = %auth.user_id(),
        transaction_id = %transaction.id,
        kind = %transaction.kind,
        amount = %transaction.amount,
        "Transaction created"
    );
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// GET /transactions/{transaction_id}
async fn get_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(transaction_id): PathParam<TransactionId>,
) -> ApiResult<Json<Transaction>> {
    let transaction = state
        .transactions
        .get(transaction_id, auth.user_id())
        .await?;
    Ok(Json(transaction))
}

/// PUT /transactions/{transaction_id}
async fn update_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(transaction_id): PathParam<TransactionId>,
    JsonBody(payload): JsonBody<UpdateTransactionInput>,
) -> ApiResult<Json<Transaction>> {
    let transaction = state
        .transactions
        .update(transaction_id, auth.user_id(), payload)
        .await?;
    info!(user_id = %auth.user_id(), transaction_id = %transaction.id, "Transaction updated");
    Ok(Json(transaction))
}

/// DELETE /transactions/{transaction_id}
async fn delete_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(transaction_id): PathParam<TransactionId>,
) -> ApiResult<StatusCode> {
    if !state
        .transactions
        .delete(transaction_id, auth.user_id())
        .await?
    {
        return Err(TransactionError::NotFound(transaction_id).into());
    }
    info!(user_id = %auth.user_id(), transaction_id = %transaction_id, "Transaction deleted");
    Ok(StatusCode::NO_CONTENT)
}
