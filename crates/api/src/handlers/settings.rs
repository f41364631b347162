//! Handlers for `/settings/reminders` (per-event message templates).

use axum::extract::State;
use axum::Json;

use salon_core::error::CoreError;
use salon_core::reminders::EventKind;
use salon_db::models::reminder::{ReminderTemplate, SaveReminderTemplate};
use salon_db::repositories::ReminderRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthOwner;
use crate::state::AppState;

/// GET /api/settings/reminders
///
/// The owner's saved templates. Event types with no saved row fall back to
/// the built-in default at render time and are not listed here.
pub async fn list_templates(
    State(state): State<AppState>,
    auth: AuthOwner,
) -> AppResult<Json<Vec<ReminderTemplate>>> {
    let templates = ReminderRepo::list_for_owner(&state.pool, auth.owner_id).await?;
    Ok(Json(templates))
}

/// PUT /api/settings/reminders
///
/// Upserts one template; there is exactly one row per owner and event type.
pub async fn save_template(
    State(state): State<AppState>,
    auth: AuthOwner,
    Json(input): Json<SaveReminderTemplate>,
) -> AppResult<Json<ReminderTemplate>> {
    let event_type = input
        .event_type
        .as_deref()
        .and_then(EventKind::parse)
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "event_type must be \"birthday\", \"anniversary\", or \"custom\"".into(),
            ))
        })?;

    let template = input.template.unwrap_or_default();
    if template.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "template is required".into(),
        )));
    }

    let saved =
        ReminderRepo::upsert(&state.pool, auth.owner_id, event_type.as_str(), &template).await?;
    Ok(Json(saved))
}
