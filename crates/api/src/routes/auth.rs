//! Authentication routes for registration, login and the current user.

use axum::{Json, Router, extract::State, http::StatusCode, routing::{get, post}};
use budgetbuddy_shared::AppError;
use budgetbuddy_shared::auth::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};
use tracing::{error, info};

use crate::{AppState, error::ApiResult, extractors::JsonBody, middleware::AuthUser};

/// Public auth routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
}

/// Auth routes that need a valid token.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/auth/me", get(me))
}

/// POST /auth/register - Create an account.
async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserInfo>)> {
    let user = state.accounts.register(payload).await?;
    info!(user_id = %user.id, username = %user.username, "User registered");
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /auth/login - Check credentials and issue an access token.
async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let user = match state
        .accounts
        .authenticate(&payload.username, &payload.password)
        .await
    {
        Ok(user) => user,
        Err(e) => {
            info!(username = %payload.username, "Failed login attempt");
            return Err(e.into());
        }
    };

    let access_token = state
        .jwt_service
        .generate_access_token(user.id, &user.username)
        .map_err(|e| {
            error!(error = %e, "Failed to generate access token");
            AppError::Internal(e.to_string())
        })?;

    info!(user_id = %user.id, "User logged in");
    Ok(Json(LoginResponse {
        user: user.into(),
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.jwt_service.access_token_expires_in(),
    }))
}

/// GET /auth/me - The caller's own account.
async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<UserInfo>> {
    let user = state.accounts.get(auth.user_id()).await?;
    Ok(Json(user.into()))
}
