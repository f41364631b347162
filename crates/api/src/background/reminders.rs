//! Daily reminder sweep.
//!
//! Spawns a background task that logs the reminders due today for the
//! salon's owner account. External delivery (SMS/email) is out of scope,
//! so the rendered messages go to the structured log where an operator or
//! a later delivery integration can pick them up.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use salon_db::repositories::OwnerRepo;
use salon_db::DbPool;

use crate::handlers::reminders::upcoming_for_owner;

/// How often the sweep runs.
const SWEEP_INTERVAL: Duration = Duration::from_secs(24 * 3600);

/// Only same-day events are announced by the sweep; the HTTP endpoint
/// covers wider lookahead windows.
const SWEEP_WINDOW_DAYS: u32 = 0;

/// Run the daily reminder sweep loop until `cancel` is triggered.
pub async fn run(pool: DbPool, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = SWEEP_INTERVAL.as_secs(),
        "Reminder sweep started"
    );

    let mut interval = tokio::time::interval(SWEEP_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Reminder sweep stopping");
                break;
            }
            _ = interval.tick() => {
                if let Err(e) = sweep_once(&pool).await {
                    tracing::error!(error = %e, "Reminder sweep failed");
                }
            }
        }
    }
}

/// One pass: log every reminder due today.
async fn sweep_once(pool: &DbPool) -> Result<(), sqlx::Error> {
    let Some(owner) = OwnerRepo::first(pool).await? else {
        tracing::debug!("Reminder sweep: no owner account registered yet");
        return Ok(());
    };

    let today = chrono::Utc::now().date_naive();
    let due = upcoming_for_owner(pool, &owner, today, SWEEP_WINDOW_DAYS).await?;

    if due.is_empty() {
        tracing::debug!("Reminder sweep: nothing due today");
        return Ok(());
    }

    for reminder in &due {
        tracing::info!(
            customer_id = reminder.customer_id,
            customer = %reminder.customer_name,
            event = %reminder.event_type,
            message = %reminder.message,
            "Reminder due today"
        );
    }
    tracing::info!(count = due.len(), "Reminder sweep complete");
    Ok(())
}
