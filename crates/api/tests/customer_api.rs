//! Integration tests for the `/api/customers` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn create_customer_returns_id(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(
        app.clone(),
        "/api/customers",
        json!({
            "name": "Asha Patel",
            "phone": "+91 98765 43210",
            "email": "asha@example.com",
            "birthday": "1990-09-02"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["id"].as_i64().is_some(), "create must return an id");
}

#[sqlx::test]
async fn create_returns_strictly_increasing_ids(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let mut last_id = 0;
    for name in ["First", "Second", "Third"] {
        let response = post_json(app.clone(), "/api/customers", json!({ "name": name })).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let id = body_json(response).await["id"].as_i64().unwrap();
        assert!(id > last_id, "ids must strictly increase");
        last_id = id;
    }
}

#[sqlx::test]
async fn missing_name_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(app.clone(), "/api/customers", json!({ "phone": "123" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Name is required");

    // No row must have been inserted.
    let response = get(app, "/api/customers").await;
    let customers = body_json(response).await;
    assert_eq!(customers.as_array().unwrap().len(), 0);
}

#[sqlx::test]
async fn whitespace_name_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(app, "/api/customers", json!({ "name": "   " })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn malformed_birthday_is_rejected_with_field_message(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(
        app,
        "/api/customers",
        json!({ "name": "Asha", "birthday": "02-09-1990" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid birthday format (YYYY-MM-DD)");
}

#[sqlx::test]
async fn duplicate_names_are_accepted(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    for _ in 0..2 {
        let response = post_json(app.clone(), "/api/customers", json!({ "name": "Twin" })).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app, "/api/customers").await;
    let customers = body_json(response).await;
    assert_eq!(customers.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// List / get
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn list_returns_newest_first(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    for name in ["Older", "Newer"] {
        let response = post_json(app.clone(), "/api/customers", json!({ "name": name })).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app, "/api/customers").await;
    assert_eq!(response.status(), StatusCode::OK);

    let customers = body_json(response).await;
    let names: Vec<_> = customers
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Newer", "Older"]);
}

#[sqlx::test]
async fn get_by_id_returns_the_customer(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(
        app.clone(),
        "/api/customers",
        json!({ "name": "Asha", "email": "asha@example.com" }),
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = get(app, &format!("/api/customers/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Asha");
    assert_eq!(json["email"], "asha@example.com");
}

#[sqlx::test]
async fn get_unknown_id_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = get(app, "/api/customers/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn update_replaces_fields(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(
        app.clone(),
        "/api/customers",
        json!({ "name": "Before", "phone": "111" }),
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/api/customers/{id}"),
        json!({ "name": "After" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "After");
    // Full replacement: the omitted phone is cleared.
    assert!(json["phone"].is_null());
}

#[sqlx::test]
async fn update_validates_like_create(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(app.clone(), "/api/customers", json!({ "name": "Asha" })).await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = put_json(app, &format!("/api/customers/{id}"), json!({ "name": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn delete_removes_the_customer(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(app.clone(), "/api/customers", json!({ "name": "Gone" })).await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = delete(app.clone(), &format!("/api/customers/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/customers/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn delete_unknown_id_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = delete(app, "/api/customers/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
