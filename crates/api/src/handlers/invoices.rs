//! Handlers for the `/invoices` resource.
//!
//! List and detail responses carry derived currency amounts (subtotal,
//! discount_amount, tax_amount) computed from the stored total and the
//! stored percentage rates, so the UI never re-implements the arithmetic.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use salon_core::billing::BillingBreakdown;
use salon_core::error::CoreError;
use salon_core::types::DbId;
use salon_core::validation;
use salon_db::models::invoice::{CreateInvoice, Invoice, InvoiceListItem, UpdateInvoice};
use salon_db::repositories::invoice_repo::NewInvoice;
use salon_db::repositories::InvoiceRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::customers::CreatedResponse;
use crate::state::AppState;

/// An invoice row plus the currency amounts derived from its rates.
#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    #[serde(flatten)]
    pub invoice: InvoiceListItem,
    pub subtotal: f64,
    pub discount_amount: f64,
    pub tax_amount: f64,
}

impl From<InvoiceListItem> for InvoiceResponse {
    fn from(invoice: InvoiceListItem) -> Self {
        let amounts =
            BillingBreakdown::from_total(invoice.total_amount, invoice.discount, invoice.tax);
        Self {
            subtotal: amounts.subtotal,
            discount_amount: amounts.discount_amount,
            tax_amount: amounts.tax_amount,
            invoice,
        }
    }
}

/// GET /api/invoices
///
/// All invoices joined with the customer name, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<InvoiceResponse>>> {
    let invoices = InvoiceRepo::list(&state.pool).await?;
    Ok(Json(invoices.into_iter().map(Into::into).collect()))
}

/// POST /api/invoices
///
/// Creates an invoice. `customer_id` and a strictly positive `total_amount`
/// are required; the customer's existence is not checked.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInvoice>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let customer_id = input.customer_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("customer_id is required".into()))
    })?;
    let total_amount = input.total_amount.ok_or_else(|| {
        AppError::Core(CoreError::Validation("total_amount is required".into()))
    })?;
    validation::validate_total_amount(total_amount).map_err(CoreError::Validation)?;

    let new_invoice = NewInvoice::with_defaults(
        customer_id,
        total_amount,
        input.discount,
        input.tax,
        input.payment_status,
    );
    let id = InvoiceRepo::create(&state.pool, &new_invoice).await?;
    tracing::info!(invoice_id = id, customer_id, "Invoice created");
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /api/invoices/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<InvoiceResponse>> {
    let invoice = InvoiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))?;
    Ok(Json(invoice.into()))
}

/// PUT /api/invoices/{id}
///
/// Partial update of the rates and payment status; absent fields keep
/// their stored value. The total is fixed at creation.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInvoice>,
) -> AppResult<Json<Invoice>> {
    let invoice = InvoiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))?;
    Ok(Json(invoice))
}

/// DELETE /api/invoices/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = InvoiceRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))
    }
}
