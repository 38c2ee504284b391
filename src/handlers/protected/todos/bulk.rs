use axum::extract::rejection::JsonRejection;
use axum::{extract::State, response::IntoResponse, Extension, Json};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::database::TodoRepository;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct BulkCompleteRequest {
    pub ids: Vec<Uuid>,
    pub completed: bool,
}

fn require_ids(ids: &[Uuid]) -> Result<(), ApiError> {
    if ids.is_empty() {
        return Err(ApiError::bad_request("ids must not be empty"));
    }
    Ok(())
}

/// POST /todos/bulk-delete - soft-delete every owned todo in the id set.
///
/// One set-oriented statement; ids not owned by the caller are silently
/// skipped and the affected count reflects that.
pub async fn bulk_delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Result<Json<BulkDeleteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body?;
    require_ids(&req.ids)?;

    let deleted = TodoRepository::new(state.pool.clone())
        .bulk_delete(user.user_id, &req.ids)
        .await?;

    Ok(Json(json!({
        "message": "Todos deleted successfully",
        "deleted": deleted,
    })))
}

/// POST /todos/bulk-complete - set the completed flag across the id set
pub async fn bulk_complete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Result<Json<BulkCompleteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body?;
    require_ids(&req.ids)?;

    let updated = TodoRepository::new(state.pool.clone())
        .bulk_complete(user.user_id, &req.ids, req.completed)
        .await?;

    Ok(Json(json!({
        "message": "Todos updated successfully",
        "updated": updated,
    })))
}
