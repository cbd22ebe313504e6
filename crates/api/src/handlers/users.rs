//! Handlers for user registration and login.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use storefront_core::types::null_as_default;
use storefront_core::users::{invalid_credentials, validate_login, validate_registration};
use storefront_db::models::user::{CreateUser, UserResponse};
use storefront_db::repositories::UserRepo;

use crate::auth::password::{hash_password, verify_dummy_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /users/register`.
///
/// Missing or `null` fields default to empty so they reach validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub password: String,
}

/// Request body for `POST /users/login`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/users/register
///
/// Stores the user with an Argon2id hash of the password and returns the
/// user without any credential material.
pub async fn register(
    State(state): State<AppState>,
    AppJson(input): AppJson<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    validate_registration(&input.name, &input.email, &input.password)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: input.name,
            address: input.address,
            phone_number: input.phone_number,
            email: input.email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// POST /api/users/login
///
/// Several users may share an email; the oldest one whose password matches
/// wins. Unknown email and wrong password produce the same 401, and an
/// unknown email still pays for one Argon2 verification.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<UserResponse>> {
    validate_login(&input.email, &input.password)?;

    let candidates = UserRepo::list_by_email(&state.pool, &input.email).await?;

    if candidates.is_empty() {
        verify_dummy_password(&input.password);
    }

    for user in candidates {
        let matches = verify_password(&input.password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
        if matches {
            tracing::info!(user_id = user.id, "User logged in");
            return Ok(Json(UserResponse::from(user)));
        }
    }

    tracing::warn!(email = %input.email, "Rejected login attempt");
    Err(invalid_credentials().into())
}
