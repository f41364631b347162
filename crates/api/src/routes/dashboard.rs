//! Route definitions for the dashboard summary and service analytics.

use axum::routing::get;
use axum::Router;

use crate::handlers::{analytics, dashboard};
use crate::state::AppState;

/// Read-only stat routes mounted directly under `/api`.
///
/// ```text
/// GET /dashboard          -> summary
/// GET /service-analytics  -> service_analytics (static)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::summary))
        .route("/service-analytics", get(analytics::service_analytics))
}
