//! Repository for the `customers` table.

use salon_core::types::DbId;

use crate::models::customer::{Customer, NewCustomer};
use crate::DbPool;

/// Column list for `customers` queries.
const COLUMNS: &str = "id, name, phone, email, birthday, anniversary, created_at";

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// List all customers, newest first. No pagination or server-side
    /// filtering; search is a client concern.
    ///
    /// `id DESC` breaks ties between rows created within the same second,
    /// since `CURRENT_TIMESTAMP` has second resolution.
    pub async fn list(pool: &DbPool) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Customer>(&query).fetch_all(pool).await
    }

    /// Insert a new customer, returning the server-assigned id.
    ///
    /// `created_at` is assigned by the database and never updated. No
    /// uniqueness is enforced on any column; duplicate names and emails
    /// are accepted.
    pub async fn create(pool: &DbPool, input: &NewCustomer) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO customers (name, phone, email, birthday, anniversary)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(input.birthday)
        .bind(input.anniversary)
        .fetch_one(pool)
        .await
    }

    /// Find a customer by id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a customer by id, returning the updated row.
    /// `created_at` is immutable.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &NewCustomer,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "UPDATE customers
             SET name = $2, phone = $3, email = $4, birthday = $5, anniversary = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(input.birthday)
            .bind(input.anniversary)
            .fetch_optional(pool)
            .await
    }

    /// Delete a customer by id. Returns `true` if a row was deleted.
    ///
    /// Invoices referencing the customer are left untouched; their
    /// `customer_name` resolves to NULL in listings from then on.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
