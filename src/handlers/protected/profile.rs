use axum::{extract::State, response::IntoResponse, Extension, Json};

use crate::database::UserRepository;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /profile - the current user's public info.
///
/// The lookup uses the identity attached by the auth middleware, never
/// request input. A valid token for a since-deleted user yields 404; tokens
/// are not invalidated by deletion.
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let found = UserRepository::new(state.pool.clone())
        .find_by_id(user.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(found.info()))
}
