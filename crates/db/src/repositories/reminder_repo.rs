//! Repository for the `reminder_templates` table, plus the customer-dates
//! projection the reminder matching runs over.

use salon_core::types::DbId;

use crate::models::reminder::{CustomerDates, ReminderTemplate};
use crate::DbPool;

/// Column list for `reminder_templates` queries.
const COLUMNS: &str = "id, owner_id, event_type, template";

/// Provides reminder template storage and reminder source data.
pub struct ReminderRepo;

impl ReminderRepo {
    /// List an owner's saved templates.
    pub async fn list_for_owner(
        pool: &DbPool,
        owner_id: DbId,
    ) -> Result<Vec<ReminderTemplate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reminder_templates WHERE owner_id = $1 ORDER BY event_type"
        );
        sqlx::query_as::<_, ReminderTemplate>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Find one template by owner and event type.
    pub async fn find_template(
        pool: &DbPool,
        owner_id: DbId,
        event_type: &str,
    ) -> Result<Option<ReminderTemplate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reminder_templates WHERE owner_id = $1 AND event_type = $2"
        );
        sqlx::query_as::<_, ReminderTemplate>(&query)
            .bind(owner_id)
            .bind(event_type)
            .fetch_optional(pool)
            .await
    }

    /// Upsert a template. `UNIQUE(owner_id, event_type)` guarantees one row
    /// per owner and event.
    pub async fn upsert(
        pool: &DbPool,
        owner_id: DbId,
        event_type: &str,
        template: &str,
    ) -> Result<ReminderTemplate, sqlx::Error> {
        let query = format!(
            "INSERT INTO reminder_templates (owner_id, event_type, template)
             VALUES ($1, $2, $3)
             ON CONFLICT(owner_id, event_type) DO UPDATE SET template = excluded.template
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReminderTemplate>(&query)
            .bind(owner_id)
            .bind(event_type)
            .bind(template)
            .fetch_one(pool)
            .await
    }

    /// All customers carrying at least one special date. Window matching
    /// happens in memory (`salon_core::reminders`), which keeps the SQL
    /// free of month-day arithmetic.
    pub async fn customers_with_dates(pool: &DbPool) -> Result<Vec<CustomerDates>, sqlx::Error> {
        sqlx::query_as::<_, CustomerDates>(
            "SELECT id, name, birthday, anniversary
             FROM customers
             WHERE birthday IS NOT NULL OR anniversary IS NOT NULL
             ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }
}
