//! Integration tests for the authenticated account surface:
//! auth, profile, reminder settings, upcoming reminders, and reports.

mod common;

use axum::http::StatusCode;
use chrono::Datelike;
use common::{
    body_json, get, get_authed, post_json, put_json_authed, register_and_login,
};
use serde_json::json;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn register_login_me_round_trip(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let token = register_and_login(&app).await;

    let response = get_authed(app, "/api/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["email"], "priya@example.com");
    assert_eq!(json["salon_name"], "Glow Salon");
    // The password hash must never serialize.
    assert!(json.get("password_hash").is_none());
}

#[sqlx::test]
async fn duplicate_email_registration_conflicts(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let body = json!({
        "name": "Priya",
        "email": "priya@example.com",
        "password": "a-strong-password",
        "salon_name": "Glow Salon"
    });

    let response = post_json(app.clone(), "/api/auth/register", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(app, "/api/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test]
async fn short_password_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(
        app,
        "/api/auth/register",
        json!({
            "name": "Priya",
            "email": "priya@example.com",
            "password": "short",
            "salon_name": "Glow Salon"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn wrong_password_is_unauthorized(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let _token = register_and_login(&app).await;

    let response = post_json(
        app,
        "/api/auth/login",
        json!({ "email": "priya@example.com", "password": "not-the-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn protected_routes_require_a_token(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    for uri in [
        "/api/auth/me",
        "/api/profile",
        "/api/settings/reminders",
        "/api/reminders/upcoming",
        "/api/reports/revenue",
    ] {
        let response = get(app.clone(), uri).await;
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{uri} must require auth"
        );
    }
}

#[sqlx::test]
async fn garbage_token_is_unauthorized(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = get_authed(app, "/api/auth/me", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn profile_partial_update_keeps_absent_fields(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let token = register_and_login(&app).await;

    let response = put_json_authed(
        app.clone(),
        "/api/profile",
        json!({ "salon_name": "Glow & Co", "address": "12 Rose St" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["salon_name"], "Glow & Co");
    assert_eq!(json["address"], "12 Rose St");
    // Untouched fields survive.
    assert_eq!(json["name"], "Priya");
    assert_eq!(json["email"], "priya@example.com");
}

// ---------------------------------------------------------------------------
// Reminder settings and upcoming reminders
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn template_upsert_keeps_one_row_per_event(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let token = register_and_login(&app).await;

    for template in ["First draft [CustomerName]", "Final [CustomerName]"] {
        let response = put_json_authed(
            app.clone(),
            "/api/settings/reminders",
            json!({ "event_type": "birthday", "template": template }),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get_authed(app, "/api/settings/reminders", &token).await;
    let templates = body_json(response).await;
    let templates = templates.as_array().unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0]["template"], "Final [CustomerName]");
}

#[sqlx::test]
async fn custom_event_type_is_accepted(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let token = register_and_login(&app).await;

    let response = put_json_authed(
        app.clone(),
        "/api/settings/reminders",
        json!({ "event_type": "custom", "template": "Hello [CustomerName]" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_authed(app, "/api/settings/reminders", &token).await;
    let templates = body_json(response).await;
    let templates = templates.as_array().unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0]["event_type"], "custom");
}

#[sqlx::test]
async fn unknown_event_type_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let token = register_and_login(&app).await;

    let response = put_json_authed(
        app,
        "/api/settings/reminders",
        json!({ "event_type": "graduation", "template": "Hi" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn upcoming_reminders_match_dates_in_the_window(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let token = register_and_login(&app).await;

    // A birthday three days out (year ignored by the matcher); shift
    // Feb 29 to Feb 28 so the seeded 1990 date always exists.
    let soon = chrono::Utc::now().date_naive() + chrono::Days::new(3);
    let (month, day) = match (soon.month(), soon.day()) {
        (2, 29) => (2, 28),
        md => md,
    };
    let birthday = format!("1990-{month:02}-{day:02}");

    let response = post_json(
        app.clone(),
        "/api/customers",
        json!({ "name": "Asha", "birthday": birthday }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // A customer with no dates never shows up.
    let response = post_json(app.clone(), "/api/customers", json!({ "name": "Quiet" })).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_authed(app.clone(), "/api/reminders/upcoming", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let reminders = body_json(response).await;
    let reminders = reminders.as_array().unwrap();
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0]["customer_name"], "Asha");
    assert_eq!(reminders[0]["event_type"], "birthday");
    // Default template rendered with the salon name from registration.
    assert_eq!(
        reminders[0]["message"],
        "Dear Asha, greetings from Glow Salon on your birthday!"
    );

    // A zero-day window excludes it.
    let response = get_authed(app, "/api/reminders/upcoming?days=0", &token).await;
    let reminders = body_json(response).await;
    assert_eq!(reminders.as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn revenue_report_groups_by_month(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let token = register_and_login(&app).await;

    let response = post_json(app.clone(), "/api/customers", json!({ "name": "Asha" })).await;
    let customer_id = body_json(response).await["id"].as_i64().unwrap();

    for amount in [100.0, 150.0] {
        let response = post_json(
            app.clone(),
            "/api/invoices",
            json!({ "customer_id": customer_id, "total_amount": amount }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let today = chrono::Utc::now().date_naive();
    let start = today - chrono::Days::new(31);
    let end = today + chrono::Days::new(1);
    let uri = format!("/api/reports/revenue?start={start}&end={end}");

    let response = get_authed(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let rows = body_json(response).await;
    let rows = rows.as_array().unwrap();
    assert!(!rows.is_empty());
    let this_month = format!("{:04}-{:02}", today.year(), today.month());
    let row = rows
        .iter()
        .find(|r| r["label"] == this_month.as_str())
        .expect("current month row should exist");
    assert_eq!(row["value"], 250.0);
}

#[sqlx::test]
async fn top_customers_ranks_by_invoiced_total(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let token = register_and_login(&app).await;

    let mut customer_ids = Vec::new();
    for name in ["Small Spender", "Big Spender"] {
        let response = post_json(app.clone(), "/api/customers", json!({ "name": name })).await;
        customer_ids.push(body_json(response).await["id"].as_i64().unwrap());
    }

    for (customer_id, amount) in [(customer_ids[0], 50.0), (customer_ids[1], 500.0)] {
        let response = post_json(
            app.clone(),
            "/api/invoices",
            json!({ "customer_id": customer_id, "total_amount": amount }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let today = chrono::Utc::now().date_naive();
    let start = today - chrono::Days::new(31);
    let end = today + chrono::Days::new(1);
    let uri = format!("/api/reports/top-customers?start={start}&end={end}");

    let response = get_authed(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let rows = body_json(response).await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["label"], "Big Spender");
    assert_eq!(rows[0]["value"], 500.0);

    // A missing bound is a validation error.
    let response = get_authed(app, "/api/reports/revenue", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
