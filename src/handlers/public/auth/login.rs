use axum::extract::rejection::JsonRejection;
use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::auth::password::verify_password;
use crate::database::models::UserInfo;
use crate::database::UserRepository;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

// Single message for both unknown email and wrong password; the response must
// not reveal which one failed.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// POST /auth/login - verify credentials and issue a JWT
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body?;

    let users = UserRepository::new(state.pool.clone());

    let user = users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| ApiError::unauthorized(INVALID_CREDENTIALS))?;

    if !verify_password(&req.password, &user.password_hash)? {
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    }

    let token = state.jwt.issue(user.id, &user.username, &user.email)?;

    Ok(Json(LoginResponse {
        token,
        user: user.info(),
    }))
}
