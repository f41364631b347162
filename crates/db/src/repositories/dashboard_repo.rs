//! Read-only aggregation queries behind `GET /api/dashboard`.

use crate::DbPool;

/// Provides the dashboard's count and revenue reads. Three independent
/// queries, each holding a connection only for its own statement.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Total number of customer rows, unconditional.
    pub async fn total_customers(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
            .fetch_one(pool)
            .await
    }

    /// Total number of invoice rows, unconditional.
    pub async fn total_invoices(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM invoices")
            .fetch_one(pool)
            .await
    }

    /// Sum of `total_amount` for invoices created in the current calendar
    /// month, by the server clock (SQLite `'now'`, UTC). Backdated or
    /// future-dated rows fall outside the match and are excluded. Empty
    /// month sums to 0.
    pub async fn current_month_revenue(pool: &DbPool) -> Result<f64, sqlx::Error> {
        sqlx::query_scalar::<_, f64>(
            "SELECT IFNULL(SUM(total_amount), 0.0)
             FROM invoices
             WHERE strftime('%Y-%m', created_at) = strftime('%Y-%m', 'now')",
        )
        .fetch_one(pool)
        .await
    }

    /// Sum of `total_amount` for invoices created in the previous calendar
    /// month. Anchored at the start of the current month so month-length
    /// differences cannot skew the window.
    pub async fn previous_month_revenue(pool: &DbPool) -> Result<f64, sqlx::Error> {
        sqlx::query_scalar::<_, f64>(
            "SELECT IFNULL(SUM(total_amount), 0.0)
             FROM invoices
             WHERE strftime('%Y-%m', created_at) =
                   strftime('%Y-%m', 'now', 'start of month', '-1 month')",
        )
        .fetch_one(pool)
        .await
    }
}
