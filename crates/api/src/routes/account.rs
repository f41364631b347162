//! Route definitions for the authenticated account surface:
//! profile, reminder settings, upcoming reminders, and reports.

use axum::routing::get;
use axum::Router;

use crate::handlers::{profile, reminders, reports, settings};
use crate::state::AppState;

/// Account routes mounted directly under `/api`. Every handler here takes
/// the `AuthOwner` extractor, so unauthenticated requests get 401.
///
/// ```text
/// GET /profile                 -> get_profile
/// PUT /profile                 -> update_profile
/// GET /settings/reminders      -> list_templates
/// PUT /settings/reminders      -> save_template
/// GET /reminders/upcoming      -> upcoming
/// GET /reports/revenue         -> revenue
/// GET /reports/top-customers   -> top_customers
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route(
            "/settings/reminders",
            get(settings::list_templates).put(settings::save_template),
        )
        .route("/reminders/upcoming", get(reminders::upcoming))
        .route("/reports/revenue", get(reports::revenue))
        .route("/reports/top-customers", get(reports::top_customers))
}
