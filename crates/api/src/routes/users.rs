//! User lookup routes.

use axum::{Json, Router, extract::State, routing::get};
use budgetbuddy_shared::auth::UserInfo;
use budgetbuddy_shared::types::UserId;

use crate::{AppState, error::ApiResult, extractors::PathParam, middleware::AuthUser};

/// Creates the user routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{user_id}", get(get_user))
}

/// GET /users
async fn list_users(State(state): State<AppState>, _auth: AuthUser) -> ApiResult<Json<Vec<UserInfo>>> {
    let users = state.accounts.list().await?;
    Ok(Json(users.into_iter().map(UserInfo::from).collect()))
}

/// GET /users/{user_id}
async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    PathParam(user_id): PathParam<UserId>,
) -> ApiResult<Json<UserInfo>> {
    let user = state.accounts.get(user_id).await?;
    Ok(Json(user.into()))
}
