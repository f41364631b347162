//! Repository for the `invoices` table.

use salon_core::types::DbId;

use crate::models::invoice::{Invoice, InvoiceListItem, UpdateInvoice, DEFAULT_PAYMENT_STATUS};
use crate::DbPool;

/// Column list for joined invoice queries.
const JOINED_COLUMNS: &str = "i.id, i.customer_id, c.name AS customer_name, \
    i.total_amount, i.discount, i.tax, i.payment_status, i.created_at";

/// Validated insert input, built by the handler after contract checks.
#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub customer_id: DbId,
    pub total_amount: f64,
    /// Percentage rate, default 0.
    pub discount: f64,
    /// Percentage rate, default 0.
    pub tax: f64,
    pub payment_status: String,
}

/// Provides CRUD operations for invoices.
pub struct InvoiceRepo;

impl InvoiceRepo {
    /// List all invoices joined with the customer name, newest first.
    ///
    /// LEFT JOIN on purpose: an invoice whose customer was deleted still
    /// appears, with `customer_name` NULL. `id DESC` breaks same-second
    /// timestamp ties.
    pub async fn list(pool: &DbPool) -> Result<Vec<InvoiceListItem>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM invoices i
             LEFT JOIN customers c ON i.customer_id = c.id
             ORDER BY i.created_at DESC, i.id DESC"
        );
        sqlx::query_as::<_, InvoiceListItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert a new invoice, returning the server-assigned id.
    ///
    /// The referenced customer is not checked for existence; the foreign
    /// key is declarative only.
    pub async fn create(pool: &DbPool, input: &NewInvoice) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO invoices (customer_id, total_amount, discount, tax, payment_status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(input.customer_id)
        .bind(input.total_amount)
        .bind(input.discount)
        .bind(input.tax)
        .bind(&input.payment_status)
        .fetch_one(pool)
        .await
    }

    /// Find one invoice (joined with customer name) by id.
    pub async fn find_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<InvoiceListItem>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM invoices i
             LEFT JOIN customers c ON i.customer_id = c.id
             WHERE i.id = $1"
        );
        sqlx::query_as::<_, InvoiceListItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update an invoice by id; absent fields keep their stored value.
    /// Returns the bare updated row (no join). `total_amount` and
    /// `created_at` are immutable.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateInvoice,
    ) -> Result<Option<Invoice>, sqlx::Error> {
        sqlx::query_as::<_, Invoice>(
            "UPDATE invoices SET
                discount = COALESCE($2, discount),
                tax = COALESCE($3, tax),
                payment_status = COALESCE($4, payment_status)
             WHERE id = $1
             RETURNING id, customer_id, total_amount, discount, tax, payment_status, created_at",
        )
        .bind(id)
        .bind(input.discount)
        .bind(input.tax)
        .bind(&input.payment_status)
        .fetch_optional(pool)
        .await
    }

    /// Delete an invoice by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl NewInvoice {
    /// Apply creation defaults to optional fields.
    pub fn with_defaults(
        customer_id: DbId,
        total_amount: f64,
        discount: Option<f64>,
        tax: Option<f64>,
        payment_status: Option<String>,
    ) -> Self {
        Self {
            customer_id,
            total_amount,
            discount: discount.unwrap_or(0.0),
            tax: tax.unwrap_or(0.0),
            payment_status: payment_status
                .unwrap_or_else(|| DEFAULT_PAYMENT_STATUS.to_string()),
        }
    }
}
