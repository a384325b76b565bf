//! Category endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{app, expense, get, login_as, post, send};
use serde_json::json;

#[tokio::test]
async fn test_lists_default_categories() {
    let app = app();
    let token = login_as(&app, "ada").await;

    let (status, body) = get(&app, "/api/v1/categories", &token).await;
    assert_eq!(status, StatusCode::OK);
    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 10);
    assert_eq!(categories[0]["name"], "food");

    let (status, salary) = get(&app, "/api/v1/categories/9", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(salary["name"], "salary");
}

#[tokio::test]
async fn test_create_and_duplicate_category() {
    let app = app();
    let token = login_as(&app, "ada").await;

    let (status, created) = post(
        &app,
        "/api/v1/categories",
        &token,
        json!({ "name": "  pets ", "icon": "paw" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "pets");
    assert_eq!(created["id"], 11);

    let (status, body) = post(&app, "/api/v1/categories", &token, json!({ "name": "PETS" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");

    let (status, body) = post(&app, "/api/v1/categories", &token, json!({ "name": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_category() {
    let app = app();
    let token = login_as(&app, "ada").await;
    expense(&app, &token, 1, "12.50", "2024-01-10").await;

    let (status, body) =
        send(&app, Method::DELETE, "/api/v1/categories/1", Some(&token), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");

    let (status, body) =
        send(&app, Method::DELETE, "/api/v1/categories/7", Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = get(&app, "/api/v1/categories/7", &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
