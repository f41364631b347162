//! Reminder template model and upcoming-reminder projection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use salon_core::types::{Date, DbId};

/// A row from the `reminder_templates` table. One per owner and event type.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReminderTemplate {
    pub id: DbId,
    pub owner_id: DbId,
    pub event_type: String,
    pub template: String,
}

/// Request body for `PUT /api/settings/reminders` (upsert).
#[derive(Debug, Deserialize)]
pub struct SaveReminderTemplate {
    pub event_type: Option<String>,
    pub template: Option<String>,
}

/// Customer dates needed to compute upcoming reminders in memory.
#[derive(Debug, Clone, FromRow)]
pub struct CustomerDates {
    pub id: DbId,
    pub name: String,
    pub birthday: Option<Date>,
    pub anniversary: Option<Date>,
}

/// One entry in the `GET /api/reminders/upcoming` response.
#[derive(Debug, Clone, Serialize)]
pub struct UpcomingReminder {
    pub customer_id: DbId,
    pub customer_name: String,
    pub event_type: String,
    pub occurs_on: Date,
    /// Message rendered from the owner's template for this event type.
    pub message: String,
}
