pub mod account;
pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod health;
pub mod invoices;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /customers[/{id}]            customer CRUD (public)
/// /invoices[/{id}]             invoice CRUD (public)
/// /dashboard                   summary stats (public)
/// /service-analytics           static service mix (public)
///
/// /auth/register               register (public)
/// /auth/login                  login (public)
/// /auth/me                     authenticated owner
///
/// /profile                     get/update profile (requires auth)
/// /settings/reminders          get/upsert templates (requires auth)
/// /reminders/upcoming          due reminders (requires auth)
/// /reports/revenue             monthly revenue report (requires auth)
/// /reports/top-customers       top customers report (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/customers", customers::router())
        .nest("/invoices", invoices::router())
        .merge(dashboard::router())
        .nest("/auth", auth::router())
        .merge(account::router())
}
