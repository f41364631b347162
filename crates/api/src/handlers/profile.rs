//! Handlers for the `/profile` resource (owner account details).

use axum::extract::State;
use axum::Json;

use salon_core::error::CoreError;
use salon_core::validation;
use salon_db::models::owner::{Owner, UpdateProfile};
use salon_db::repositories::OwnerRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthOwner;
use crate::state::AppState;

/// GET /api/profile
pub async fn get_profile(State(state): State<AppState>, auth: AuthOwner) -> AppResult<Json<Owner>> {
    let owner = OwnerRepo::find_by_id(&state.pool, auth.owner_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Owner",
            id: auth.owner_id,
        }))?;
    Ok(Json(owner))
}

/// PUT /api/profile
///
/// Partial update of name, phone, salon name, and address. Email and
/// password stay fixed through this path.
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthOwner,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<Owner>> {
    if let Some(name) = input.name.as_deref() {
        validation::validate_name(name).map_err(CoreError::Validation)?;
    }
    if let Some(phone) = input.phone.as_deref() {
        validation::validate_phone(phone).map_err(CoreError::Validation)?;
    }

    let owner = OwnerRepo::update_profile(&state.pool, auth.owner_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Owner",
            id: auth.owner_id,
        }))?;
    tracing::info!(owner_id = owner.id, "Profile updated");
    Ok(Json(owner))
}
