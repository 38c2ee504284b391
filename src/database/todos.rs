use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewTodo, Todo};
use crate::database::query_builder::{fetch_all, fetch_count, fetch_optional};
use crate::filter::{Pagination, SqlParam, SqlResult, TodoFilter};

/// Per-owner stats block, five independent counts
#[derive(Debug, Clone, Serialize)]
pub struct TodoStats {
    pub total: i64,
    pub completed: i64,
    pub pending: i64,
    pub high_priority: i64,
    pub overdue: i64,
}

/// Owner of all todo-table access. Every statement carries the owner
/// predicate so cross-user rows are unreachable at the query level, and every
/// read excludes soft-deleted rows.
pub struct TodoRepository {
    pool: PgPool,
}

impl TodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Filtered, paginated listing plus the total matching count. Order is
    /// fixed: newest first.
    pub async fn list(
        &self,
        owner_id: Uuid,
        filter: &TodoFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<Todo>, i64), DatabaseError> {
        let where_sql = filter.to_where_sql(owner_id);

        let select = SqlResult {
            query: format!(
                "SELECT * FROM todos WHERE {} ORDER BY \"created_at\" DESC LIMIT {} OFFSET {}",
                where_sql.query,
                pagination.limit(),
                pagination.offset()
            ),
            params: where_sql.params.clone(),
        };
        let todos = fetch_all::<Todo>(&self.pool, &select).await?;

        let count = SqlResult {
            query: format!(
                "SELECT COUNT(*) as count FROM todos WHERE {}",
                where_sql.query
            ),
            params: where_sql.params,
        };
        let total = fetch_count(&self.pool, &count).await?;

        Ok((todos, total))
    }

    pub async fn find(&self, owner_id: Uuid, id: Uuid) -> Result<Option<Todo>, DatabaseError> {
        let sql = SqlResult {
            query: "SELECT * FROM todos WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL"
                .to_string(),
            params: vec![SqlParam::Uuid(id), SqlParam::Uuid(owner_id)],
        };
        fetch_optional::<Todo>(&self.pool, &sql).await
    }

    pub async fn insert(&self, owner_id: Uuid, new: NewTodo) -> Result<Todo, DatabaseError> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (id, user_id, title, description, priority, category, due_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(owner_id)
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.priority)
        .bind(&new.category)
        .bind(new.due_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(todo)
    }

    /// Full-row save of an already-fetched todo. Returns None when the row no
    /// longer exists for this owner (deleted between fetch and save).
    pub async fn update(&self, todo: &Todo) -> Result<Option<Todo>, DatabaseError> {
        let updated = sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos
            SET title = $1, description = $2, priority = $3, category = $4,
                due_date = $5, completed = $6, updated_at = NOW()
            WHERE id = $7 AND user_id = $8 AND deleted_at IS NULL
            RETURNING *
            "#,
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.priority)
        .bind(&todo.category)
        .bind(todo.due_date)
        .bind(todo.completed)
        .bind(todo.id)
        .bind(todo.user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }

    /// Soft delete; returns rows affected (0 means not found / not owned)
    pub async fn soft_delete(&self, owner_id: Uuid, id: Uuid) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE todos SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Flip the completed flag in a single statement
    pub async fn toggle_complete(
        &self,
        owner_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Todo>, DatabaseError> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos SET completed = NOT completed, updated_at = NOW()
            WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(todo)
    }

    /// Soft-delete every owned row in the id set with one statement.
    /// Rows not owned by the caller simply do not match.
    pub async fn bulk_delete(&self, owner_id: Uuid, ids: &[Uuid]) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE todos SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = ANY($1) AND user_id = $2 AND deleted_at IS NULL
            "#,
        )
        .bind(ids)
        .bind(owner_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Set the completed flag uniformly across owned rows in the id set
    pub async fn bulk_complete(
        &self,
        owner_id: Uuid,
        ids: &[Uuid],
        completed: bool,
    ) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE todos SET completed = $1, updated_at = NOW()
            WHERE id = ANY($2) AND user_id = $3 AND deleted_at IS NULL
            "#,
        )
        .bind(completed)
        .bind(ids)
        .bind(owner_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Five independent owner-scoped counts. Read-only, so no transaction;
    /// slight skew under concurrent writes is acceptable.
    pub async fn stats(&self, owner_id: Uuid) -> Result<TodoStats, DatabaseError> {
        let total = self.count_where(owner_id, "").await?;
        let completed = self.count_where(owner_id, "AND completed = TRUE").await?;
        let pending = self.count_where(owner_id, "AND completed = FALSE").await?;
        let high_priority = self
            .count_where(owner_id, "AND priority = 'high' AND completed = FALSE")
            .await?;
        let overdue = self
            .count_where(owner_id, "AND completed = FALSE AND due_date < NOW()")
            .await?;

        Ok(TodoStats {
            total,
            completed,
            pending,
            high_priority,
            overdue,
        })
    }

    async fn count_where(&self, owner_id: Uuid, condition: &str) -> Result<i64, DatabaseError> {
        let query = format!(
            "SELECT COUNT(*) FROM todos WHERE user_id = $1 AND deleted_at IS NULL {}",
            condition
        );
        let count: i64 = sqlx::query_scalar(&query)
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Distinct non-empty categories across the owner's todos
    pub async fn categories(&self, owner_id: Uuid) -> Result<Vec<String>, DatabaseError> {
        let categories: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT category FROM todos
            WHERE user_id = $1 AND deleted_at IS NULL
              AND category IS NOT NULL AND category <> ''
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }
}
