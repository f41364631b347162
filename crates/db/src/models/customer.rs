//! Customer entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use salon_core::types::{Date, DbId, Timestamp};

/// A row from the `customers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub birthday: Option<Date>,
    pub anniversary: Option<Date>,
    pub created_at: Timestamp,
}

/// Request body for creating or updating a customer.
///
/// Dates arrive as `YYYY-MM-DD` strings and are parsed in the handler so
/// a malformed value yields a 400 with a field-specific message instead of
/// a generic deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerInput {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub birthday: Option<String>,
    pub anniversary: Option<String>,
}

/// Validated form of [`CustomerInput`], ready to bind.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub birthday: Option<Date>,
    pub anniversary: Option<Date>,
}
