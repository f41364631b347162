//! Handler for `/reminders/upcoming` (birthday/anniversary matches).

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use salon_core::error::CoreError;
use salon_core::reminders::{self, EventKind, DEFAULT_TEMPLATE};
use salon_db::models::owner::Owner;
use salon_db::models::reminder::UpcomingReminder;
use salon_db::repositories::{OwnerRepo, ReminderRepo};
use salon_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthOwner;
use crate::state::AppState;

/// Default lookahead window in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Query parameters for `GET /reminders/upcoming`.
#[derive(Debug, Deserialize)]
pub struct UpcomingParams {
    /// Lookahead window in days (default: 7).
    pub days: Option<u32>,
}

/// GET /api/reminders/upcoming
///
/// Customers whose birthday or anniversary falls within the next `days`
/// days, each with the message rendered from the owner's template (or the
/// built-in default).
pub async fn upcoming(
    State(state): State<AppState>,
    auth: AuthOwner,
    Query(params): Query<UpcomingParams>,
) -> AppResult<Json<Vec<UpcomingReminder>>> {
    let owner = OwnerRepo::find_by_id(&state.pool, auth.owner_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Owner",
            id: auth.owner_id,
        }))?;

    let days = params.days.unwrap_or(DEFAULT_WINDOW_DAYS);
    let today = chrono::Utc::now().date_naive();
    let upcoming = upcoming_for_owner(&state.pool, &owner, today, days).await?;
    Ok(Json(upcoming))
}

/// Collect the reminders due within the window, sorted by date then name.
///
/// Shared between the HTTP handler and the daily background job.
pub async fn upcoming_for_owner(
    pool: &DbPool,
    owner: &Owner,
    today: chrono::NaiveDate,
    days: u32,
) -> Result<Vec<UpcomingReminder>, sqlx::Error> {
    let templates = ReminderRepo::list_for_owner(pool, owner.id).await?;
    let template_for = |event: EventKind| {
        templates
            .iter()
            .find(|t| t.event_type == event.as_str())
            .map(|t| t.template.clone())
            .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string())
    };

    let customers = ReminderRepo::customers_with_dates(pool).await?;
    let mut due = Vec::new();
    for customer in &customers {
        let events = [
            (EventKind::Birthday, customer.birthday),
            (EventKind::Anniversary, customer.anniversary),
        ];
        for (event, date) in events {
            let Some(date) = date else { continue };
            let Some(occurs_on) = reminders::upcoming_occurrence(date, today, days) else {
                continue;
            };
            let message = reminders::render_template(
                &template_for(event),
                &customer.name,
                &owner.salon_name,
                event,
            );
            due.push(UpcomingReminder {
                customer_id: customer.id,
                customer_name: customer.name.clone(),
                event_type: event.as_str().to_string(),
                occurs_on,
                message,
            });
        }
    }

    due.sort_by(|a, b| {
        a.occurs_on
            .cmp(&b.occurs_on)
            .then_with(|| a.customer_name.cmp(&b.customer_name))
    });
    Ok(due)
}
