use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::database::models::{NewTodo, Priority};
use crate::database::TodoRepository;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

use super::validate_title;

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

/// POST /todos - create a todo owned by the caller.
///
/// The owner always comes from the authenticated identity, never the body.
pub async fn create_todo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body?;

    validate_title(&req.title).map_err(ApiError::bad_request)?;

    let todo = TodoRepository::new(state.pool.clone())
        .insert(
            user.user_id,
            NewTodo {
                title: req.title,
                description: req.description,
                priority: req.priority.unwrap_or_default(),
                category: req.category,
                due_date: req.due_date,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(todo)))
}
