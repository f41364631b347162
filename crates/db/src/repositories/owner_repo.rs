//! Repository for the `owners` table.

use salon_core::types::DbId;

use crate::models::owner::{Owner, UpdateProfile};
use crate::DbPool;

/// Column list for `owners` queries.
const COLUMNS: &str =
    "id, name, email, phone, password_hash, salon_name, address, created_at, updated_at";

/// Validated registration input with the password already hashed.
#[derive(Debug, Clone)]
pub struct NewOwner {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub salon_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Provides account storage for salon owners.
pub struct OwnerRepo;

impl OwnerRepo {
    /// Insert a new owner, returning the server-assigned id.
    ///
    /// The UNIQUE constraint on `email` surfaces as a database error the
    /// API layer maps to 409.
    pub async fn create(pool: &DbPool, input: &NewOwner) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO owners (name, email, password_hash, salon_name, phone, address)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(&input.salon_name)
        .bind(&input.phone)
        .bind(&input.address)
        .fetch_one(pool)
        .await
    }

    /// Find an owner by login email.
    pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<Owner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM owners WHERE email = $1");
        sqlx::query_as::<_, Owner>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// The first registered owner, if any. The deployment is single-tenant,
    /// so this is the salon account used by background jobs.
    pub async fn first(pool: &DbPool) -> Result<Option<Owner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM owners ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Owner>(&query).fetch_optional(pool).await
    }

    /// Find an owner by id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Owner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM owners WHERE id = $1");
        sqlx::query_as::<_, Owner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update profile fields; absent fields keep their value. Email and
    /// password are not updatable through this path.
    pub async fn update_profile(
        pool: &DbPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<Owner>, sqlx::Error> {
        let query = format!(
            "UPDATE owners SET
                name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                salon_name = COALESCE($4, salon_name),
                address = COALESCE($5, address),
                updated_at = CURRENT_TIMESTAMP
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Owner>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.salon_name)
            .bind(&input.address)
            .fetch_optional(pool)
            .await
    }
}
