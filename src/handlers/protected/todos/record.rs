use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::database::models::Priority;
use crate::database::TodoRepository;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

use super::validate_title;

fn parse_todo_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::bad_request("Invalid todo id"))
}

/// GET /todos/:id
pub async fn get_todo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_todo_id(&id)?;

    let todo = TodoRepository::new(state.pool.clone())
        .find(user.user_id, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Todo not found"))?;

    Ok(Json(todo))
}

/// Partial update: only fields present in the request are applied. Present
/// title/priority values are validated rather than silently skipped;
/// description and category may be cleared to the empty string.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub completed: Option<bool>,
}

/// PUT /todos/:id
pub async fn update_todo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    body: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_todo_id(&id)?;
    let Json(req) = body?;

    let todos = TodoRepository::new(state.pool.clone());

    let mut todo = todos
        .find(user.user_id, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Todo not found"))?;

    if let Some(title) = req.title {
        validate_title(&title).map_err(ApiError::bad_request)?;
        todo.title = title;
    }
    if let Some(description) = req.description {
        todo.description = Some(description);
    }
    if let Some(priority) = req.priority {
        todo.priority = priority;
    }
    if let Some(category) = req.category {
        todo.category = Some(category);
    }
    if let Some(due_date) = req.due_date {
        todo.due_date = Some(due_date);
    }
    if let Some(completed) = req.completed {
        todo.completed = completed;
    }

    // Benign last-writer-wins race; the row can only be contended by the
    // owner's own concurrent requests.
    let updated = todos
        .update(&todo)
        .await?
        .ok_or_else(|| ApiError::not_found("Todo not found"))?;

    Ok(Json(updated))
}

/// DELETE /todos/:id - soft delete
pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_todo_id(&id)?;

    let affected = TodoRepository::new(state.pool.clone())
        .soft_delete(user.user_id, id)
        .await?;

    if affected == 0 {
        return Err(ApiError::not_found("Todo not found"));
    }

    Ok(Json(json!({ "message": "Todo deleted successfully" })))
}

/// PATCH /todos/:id/toggle - flip the completed flag
pub async fn toggle_complete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_todo_id(&id)?;

    let todo = TodoRepository::new(state.pool.clone())
        .toggle_complete(user.user_id, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Todo not found"))?;

    Ok(Json(todo))
}
