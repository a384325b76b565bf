//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes under `/api/v1`
//! - Authentication middleware
//! - Request extractors that report rejections as JSON errors
//! - The `ApiError` response wrapper

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use budgetbuddy_core::Stores;
use budgetbuddy_core::auth::AccountService;
use budgetbuddy_core::budget::BudgetService;
use budgetbuddy_core::category::CategoryService;
use budgetbuddy_core::reports::ReportService;
use budgetbuddy_core::transaction::TransactionService;
use budgetbuddy_shared::JwtService;
use budgetbuddy_shared::config::PaginationConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ApiResult};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// User registration, login and lookup.
    pub accounts: AccountService,
    /// Spending categories.
    pub categories: CategoryService,
    /// Income and expense transactions.
    pub transactions: TransactionService,
    /// Monthly budgets and their spending.
    pub budgets: BudgetService,
    /// Period reports.
    pub reports: ReportService,
    /// JWT service for token operations.
    pub jwt_service: Arc<JwtService>,
    /// Page size limits for list endpoints.
    pub pagination: PaginationConfig,
}

impl AppState {
    /// Wires every service to the given stores.
    #[must_use]
    pub fn new(stores: Stores, jwt_service: JwtService, pagination: PaginationConfig) -> Self {
        Self {
            accounts: AccountService::new(stores.users),
            categories: CategoryService::new(stores.categories.clone()),
            transactions: TransactionService::new(
                stores.transactions.clone(),
                stores.categories.clone(),
            ),
            budgets: BudgetService::new(
                stores.budgets.clone(),
                stores.categories.clone(),
                stores.spending,
            ),
            reports: ReportService::new(stores.transactions, stores.budgets, stores.categories),
            jwt_service: Arc::new(jwt_service),
            pagination,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("jwt_service", &self.jwt_service)
            .field("pagination", &self.pagination)
            .finish_non_exhaustive()
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
