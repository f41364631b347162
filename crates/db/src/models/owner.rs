//! Salon owner (account) model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use salon_core::types::{DbId, Timestamp};

/// A row from the `owners` table. The password hash never serializes.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Owner {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub salon_name: String,
    pub address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /api/auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterOwner {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub salon_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Request body for `PUT /api/profile`. Absent fields keep their value.
#[derive(Debug, Deserialize)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub salon_name: Option<String>,
    pub address: Option<String>,
}
