use axum::{extract::State, response::IntoResponse, Extension, Json};

use crate::database::TodoRepository;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /todos/stats - total / completed / pending / high-priority-pending /
/// overdue counts for the caller
pub async fn get_stats(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let stats = TodoRepository::new(state.pool.clone())
        .stats(user.user_id)
        .await?;

    Ok(Json(stats))
}
