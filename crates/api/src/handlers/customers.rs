//! Handlers for the `/customers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use salon_core::error::CoreError;
use salon_core::types::{Date, DbId};
use salon_core::validation;
use salon_db::models::customer::{Customer, CustomerInput, NewCustomer};
use salon_db::repositories::CustomerRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response body for `POST /customers`: the id of the created row.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
}

/// GET /api/customers
///
/// All customers, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = CustomerRepo::list(&state.pool).await?;
    Ok(Json(customers))
}

/// POST /api/customers
///
/// Creates a customer. `name` is required; everything else is optional.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CustomerInput>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let new_customer = validate_input(input)?;
    let id = CustomerRepo::create(&state.pool, &new_customer).await?;
    tracing::info!(customer_id = id, "Customer created");
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /api/customers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Customer>> {
    let customer = CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(Json(customer))
}

/// PUT /api/customers/{id}
///
/// Full replacement with the same validation as create.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CustomerInput>,
) -> AppResult<Json<Customer>> {
    let new_customer = validate_input(input)?;
    let customer = CustomerRepo::update(&state.pool, id, &new_customer)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(Json(customer))
}

/// DELETE /api/customers/{id}
///
/// Invoices referencing the customer are left in place; their joined
/// `customer_name` becomes NULL.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = CustomerRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))
    }
}

/// Validate the raw request body into a bindable [`NewCustomer`].
fn validate_input(input: CustomerInput) -> Result<NewCustomer, AppError> {
    let name = input.name.unwrap_or_default();
    validation::validate_name(&name).map_err(CoreError::Validation)?;

    if let Some(phone) = input.phone.as_deref() {
        validation::validate_phone(phone).map_err(CoreError::Validation)?;
    }
    if let Some(email) = input.email.as_deref() {
        validation::validate_email(email).map_err(CoreError::Validation)?;
    }

    let birthday = parse_optional_date("birthday", input.birthday.as_deref())?;
    let anniversary = parse_optional_date("anniversary", input.anniversary.as_deref())?;

    Ok(NewCustomer {
        name: name.trim().to_string(),
        phone: input.phone,
        email: input.email,
        birthday,
        anniversary,
    })
}

/// Parse an optional `YYYY-MM-DD` field, treating empty strings as absent.
fn parse_optional_date(field: &str, value: Option<&str>) -> Result<Option<Date>, AppError> {
    match value {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => validation::parse_date(field, s)
            .map(Some)
            .map_err(|e| AppError::Core(CoreError::Validation(e))),
    }
}
