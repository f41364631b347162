//! Aggregation queries behind the reporting endpoints.

use salon_core::types::Date;

use crate::models::report::ReportRow;
use crate::DbPool;

/// Maximum rows returned by the top-customers report.
const TOP_CUSTOMERS_LIMIT: i64 = 10;

/// Provides revenue and top-customer reports over a date range.
pub struct ReportRepo;

impl ReportRepo {
    /// Revenue summed per calendar month between `start` and `end`
    /// (inclusive, comparing against the invoice creation date).
    pub async fn monthly_revenue(
        pool: &DbPool,
        start: Date,
        end: Date,
    ) -> Result<Vec<ReportRow>, sqlx::Error> {
        sqlx::query_as::<_, ReportRow>(
            "SELECT strftime('%Y-%m', created_at) AS label, SUM(total_amount) AS value
             FROM invoices
             WHERE date(created_at) BETWEEN $1 AND $2
             GROUP BY label
             ORDER BY label",
        )
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await
    }

    /// Top customers by invoiced total between `start` and `end`.
    /// Invoices whose customer was deleted are excluded by the join.
    pub async fn top_customers(
        pool: &DbPool,
        start: Date,
        end: Date,
    ) -> Result<Vec<ReportRow>, sqlx::Error> {
        sqlx::query_as::<_, ReportRow>(
            "SELECT c.name AS label, SUM(i.total_amount) AS value
             FROM invoices i
             JOIN customers c ON i.customer_id = c.id
             WHERE date(i.created_at) BETWEEN $1 AND $2
             GROUP BY c.id, c.name
             ORDER BY value DESC
             LIMIT $3",
        )
        .bind(start)
        .bind(end)
        .bind(TOP_CUSTOMERS_LIMIT)
        .fetch_all(pool)
        .await
    }
}
