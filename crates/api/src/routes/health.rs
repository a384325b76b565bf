//! Liveness check for load balancers.

use axum::{Json, Router, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// Always `"ok"` while the process serves requests.
    pub status: &'static str,
    /// Crate name of the running API.
    pub service: &'static str,
    /// Crate version of the running API.
    pub version: &'static str,
    /// Server clock at the time of the check.
    pub checked_at: DateTime<Utc>,
}

impl HealthStatus {
    fn now() -> Self {
        Self {
            status: "ok",
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            checked_at: Utc::now(),
        }
    }
}

/// Public routes that need no token.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(|| async { Json(HealthStatus::now()) }))
}
