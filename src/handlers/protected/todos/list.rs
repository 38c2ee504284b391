use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::database::models::Todo;
use crate::database::TodoRepository;
use crate::error::ApiError;
use crate::filter::{Pagination, PaginationMeta, TodoFilter};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// Raw query-string values; parsing and validation live in the filter module
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub completed: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub todos: Vec<Todo>,
    pub pagination: PaginationMeta,
}

/// GET /todos - filtered, paginated listing, newest first
pub async fn list_todos(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = TodoFilter::from_query(
        query.completed.as_deref(),
        query.priority.as_deref(),
        query.category.as_deref(),
        query.search.as_deref(),
    )?;
    let pagination = Pagination::from_query(query.page.as_deref(), query.limit.as_deref())?;

    let (todos, total) = TodoRepository::new(state.pool.clone())
        .list(user.user_id, &filter, &pagination)
        .await?;

    Ok(Json(ListResponse {
        todos,
        pagination: pagination.meta(total),
    }))
}
