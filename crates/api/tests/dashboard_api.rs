//! Integration tests for `/api/dashboard` and `/api/service-analytics`.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::SqlitePool;

async fn seed_invoice(app: &Router, customer_id: i64, amount: f64) {
    let response = post_json(
        app.clone(),
        "/api/invoices",
        json!({ "customer_id": customer_id, "total_amount": amount }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn empty_store_reports_zeros(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = get(app, "/api/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["totalCustomers"], 0);
    assert_eq!(json["totalInvoices"], 0);
    assert_eq!(json["monthlyRevenue"], 0.0);
    assert_eq!(json["growthRate"], "0.0%");
}

#[sqlx::test]
async fn counts_and_revenue_reflect_inserts(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone()).await;

    let response = post_json(app.clone(), "/api/customers", json!({ "name": "Asha" })).await;
    let customer_id = body_json(response).await["id"].as_i64().unwrap();

    seed_invoice(&app, customer_id, 100.0).await;
    seed_invoice(&app, customer_id, 250.0).await;

    let response = get(app, "/api/dashboard").await;
    let json = body_json(response).await;

    assert_eq!(json["totalCustomers"], 1);
    assert_eq!(json["totalInvoices"], 2);
    assert_eq!(json["monthlyRevenue"], 350.0);
}

#[sqlx::test]
async fn monthly_revenue_excludes_other_months(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone()).await;

    let response = post_json(app.clone(), "/api/customers", json!({ "name": "Asha" })).await;
    let customer_id = body_json(response).await["id"].as_i64().unwrap();

    seed_invoice(&app, customer_id, 100.0).await;

    // A backdated row, inserted directly, must not count toward this month.
    sqlx::query(
        "INSERT INTO invoices (customer_id, total_amount, created_at)
         VALUES ($1, 999.0, '2020-01-15 10:00:00')",
    )
    .bind(customer_id)
    .execute(&pool)
    .await
    .expect("direct insert should succeed");

    let response = get(app, "/api/dashboard").await;
    let json = body_json(response).await;

    assert_eq!(json["totalInvoices"], 2);
    assert_eq!(json["monthlyRevenue"], 100.0);
}

// ---------------------------------------------------------------------------
// Service analytics
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn service_analytics_returns_the_static_dataset(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = get(app, "/api/service-analytics").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let services = json.as_array().unwrap();
    assert_eq!(services.len(), 5);

    assert_eq!(services[0]["name"], "Hair Cut & Style");
    assert_eq!(services[0]["value"], 35);
    assert_eq!(services[0]["revenue"], 8750);
    assert_eq!(services[0]["color"], "#7c3aed");

    // Booking shares add up to the whole pie.
    let total: u64 = services
        .iter()
        .map(|s| s["value"].as_u64().unwrap())
        .sum();
    assert_eq!(total, 100);
}
