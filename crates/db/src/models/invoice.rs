//! Invoice entity model and DTOs.
//!
//! `discount` and `tax` are stored as percentage rates (0-100 expected,
//! unclamped). Flat currency amounts are derived at read time from the
//! stored total -- see `salon_core::billing`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use salon_core::types::{DbId, Timestamp};

/// Default payment status applied when a new invoice omits one.
pub const DEFAULT_PAYMENT_STATUS: &str = "Unpaid";

/// A row from the `invoices` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Invoice {
    pub id: DbId,
    pub customer_id: Option<DbId>,
    pub total_amount: f64,
    pub discount: f64,
    pub tax: f64,
    pub payment_status: String,
    pub created_at: Timestamp,
}

/// An invoice row joined with the customer name for list views.
///
/// `customer_name` is NULL when the referenced customer has been deleted;
/// the invoice still appears in listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InvoiceListItem {
    pub id: DbId,
    pub customer_id: Option<DbId>,
    pub customer_name: Option<String>,
    pub total_amount: f64,
    pub discount: f64,
    pub tax: f64,
    pub payment_status: String,
    pub created_at: Timestamp,
}

/// Request body for creating an invoice.
///
/// `customer_id` and `total_amount` are required by the endpoint; they are
/// optional here so a missing field produces the contract's 400 response
/// rather than a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvoice {
    pub customer_id: Option<DbId>,
    pub total_amount: Option<f64>,
    pub discount: Option<f64>,
    pub tax: Option<f64>,
    pub payment_status: Option<String>,
}

/// Request body for updating an invoice. Absent fields keep their value.
/// The total is immutable after creation; only the rates and the payment
/// status can change.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInvoice {
    pub discount: Option<f64>,
    pub tax: Option<f64>,
    pub payment_status: Option<String>,
}
