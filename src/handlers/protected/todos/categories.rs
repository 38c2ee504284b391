use axum::{extract::State, response::IntoResponse, Extension, Json};
use serde_json::json;

use crate::database::TodoRepository;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /todos/categories - distinct non-empty categories for the caller
pub async fn get_categories(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = TodoRepository::new(state.pool.clone())
        .categories(user.user_id)
        .await?;

    Ok(Json(json!({ "categories": categories })))
}
