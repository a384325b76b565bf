//! Category routes.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use budgetbuddy_core::category::{Category, CreateCategoryInput};
use budgetbuddy_shared::types::CategoryId;
use tracing::info;

use crate::{
    AppState,
    error::ApiResult,
    extractors::{JsonBody, PathParam},
    middleware::AuthUser,
};

/// Creates the category routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{category_id}",
            get(get_category).delete(delete_category),
        )
}

/// GET /categories
async fn list_categories(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<Category>>> {
    Ok(Json(state.categories.list().await?))
}

/// POST /categories
async fn create_category(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<CreateCategoryInput>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let category = state.categories.create(payload).await?;
    info!(
        user_id = %auth.user_id(),
        category_id = %category.id,
        name = %category.name,
        "Category created"
    );
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /categories/{category_id}
async fn get_category(
    State(state): State<AppState>,
    _auth: AuthUser,
    PathParam(category_id): PathParam<CategoryId>,
) -> ApiResult<Json<Category>> {
    Ok(Json(state.categories.get(category_id).await?))
}

/// DELETE /categories/{category_id}
async fn delete_category(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(category_id): PathParam<CategoryId>,
) -> ApiResult<StatusCode> {
    state.categories.delete(category_id).await?;
    info!(user_id = %auth.user_id(), category_id = %category_id, "Category deleted");
    Ok(StatusCode::NO_CONTENT)
}
