//! Handlers for the `/auth` resource (register, login, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use salon_core::error::CoreError;
use salon_core::types::DbId;
use salon_core::validation;
use salon_db::models::owner::{Owner, RegisterOwner};
use salon_db::repositories::owner_repo::NewOwner;
use salon_db::repositories::OwnerRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::handlers::customers::CreatedResponse;
use crate::middleware::auth::AuthOwner;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub owner: OwnerInfo,
}

/// Public owner info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct OwnerInfo {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub salon_name: String,
}

/// POST /api/auth/register
///
/// Creates the owner account. Duplicate emails map to 409 via the unique
/// constraint on `owners.email`.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterOwner>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let name = input.name.unwrap_or_default();
    validation::validate_name(&name).map_err(CoreError::Validation)?;

    let email = input
        .email
        .ok_or_else(|| AppError::Core(CoreError::Validation("email is required".into())))?;
    validation::validate_email(&email).map_err(CoreError::Validation)?;

    let password = input
        .password
        .ok_or_else(|| AppError::Core(CoreError::Validation("password is required".into())))?;
    validation::validate_password(&password).map_err(CoreError::Validation)?;

    let salon_name = input.salon_name.unwrap_or_default();
    if salon_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "salon_name is required".into(),
        )));
    }

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let new_owner = NewOwner {
        name: name.trim().to_string(),
        email,
        password_hash,
        salon_name: salon_name.trim().to_string(),
        phone: input.phone,
        address: input.address,
    };
    let id = OwnerRepo::create(&state.pool, &new_owner).await?;
    tracing::info!(owner_id = id, "Owner registered");
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// POST /api/auth/login
///
/// Authenticate with email + password. Returns a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let (Some(email), Some(password)) = (input.email, input.password) else {
        return Err(AppError::Core(CoreError::Validation(
            "email and password are required".into(),
        )));
    };

    let owner = OwnerRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&password, &owner.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let access_token = generate_access_token(owner.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(owner_id = owner.id, "Owner logged in");
    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        owner: OwnerInfo {
            id: owner.id,
            name: owner.name,
            email: owner.email,
            salon_name: owner.salon_name,
        },
    }))
}

/// GET /api/auth/me
///
/// The authenticated owner's full record (password hash never serializes).
pub async fn me(State(state): State<AppState>, auth: AuthOwner) -> AppResult<Json<Owner>> {
    let owner = OwnerRepo::find_by_id(&state.pool, auth.owner_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Owner",
            id: auth.owner_id,
        }))?;
    Ok(Json(owner))
}
