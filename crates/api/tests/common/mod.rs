//! Shared helpers for driving the router in tests.

#![allow(dead_code)]

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use budgetbuddy_api::{AppState, create_router};
use budgetbuddy_core::MemoryStore;
use budgetbuddy_shared::config::PaginationConfig;
use budgetbuddy_shared::{JwtConfig, JwtService};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Router over a fresh in-memory store with the default categories.
pub fn app() -> Router {
    let store = Arc::new(MemoryStore::with_default_categories());
    let state = AppState::new(
        store.stores(),
        JwtService::new(JwtConfig::default()),
        PaginationConfig::default(),
    );
    create_router(state)
}

/// Sends one request and returns the status and the JSON body (`Null` when empty).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// GET with a token.
pub async fn get(app: &Router, uri: &str, token: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, Some(token), None).await
}

/// POST a JSON body with a token.
pub async fn post(app: &Router, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

/// Registers `username` with a fixed password and returns an access token.
pub async fn login_as(app: &Router, username: &str) -> String {
    let (status, _) = send(
        app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({
            "username": username,
            "password": "secret123",
            "first_name": "Test",
            "last_name": "User"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "username": username, "password": "secret123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["access_token"].as_str().unwrap().to_string()
}

/// Reads a decimal serialized as a JSON string.
pub fn amount(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("decimal as string")).unwrap()
}

/// Creates an expense and returns its JSON.
pub async fn expense(app: &Router, token: &str, category_id: i64, amount: &str, on: &str) -> Value {
    let (status, body) = post(
        app,
        "/api/v1/transactions",
        token,
        json!({
            "category_id": category_id,
            "kind": "expense",
            "amount": amount,
            "occurred_on": on
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

/// Creates a budget and returns its JSON.
pub async fn budget(app: &Router, token: &str, category_id: i64, month: &str, amount: &str) -> Value {
    let (status, body) = post(
        app,
        "/api/v1/budgets",
        token,
        json!({
            "category_id": category_id,
            "cycle_month": month,
            "budget_amount": amount
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}
