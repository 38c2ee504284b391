use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::password::hash_password;
use crate::database::UserRepository;
use crate::error::ApiError;
use crate::state::AppState;

use super::utils::{validate_email_format, validate_password, validate_username_format};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: Uuid,
}

/// POST /auth/register - create a new user account.
///
/// Uniqueness is checked email first, then username; registration does not
/// log the user in (no token in the response).
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body?;

    validate_username_format(&req.username).map_err(ApiError::bad_request)?;
    validate_email_format(&req.email).map_err(ApiError::bad_request)?;
    validate_password(&req.password).map_err(ApiError::bad_request)?;

    let users = UserRepository::new(state.pool.clone());

    if users.find_by_email(&req.email).await?.is_some() {
        return Err(ApiError::bad_request("Email already exists"));
    }
    if users.find_by_username(&req.username).await?.is_some() {
        return Err(ApiError::bad_request("Username already exists"));
    }

    let password_hash = hash_password(&req.password)?;
    let user = users.insert(&req.username, &req.email, &password_hash).await?;

    tracing::info!("Registered user {} ({})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully".to_string(),
            user_id: user.id,
        }),
    ))
}
