use uuid::Uuid;

use crate::database::models::Priority;

use super::error::FilterError;
use super::types::{SqlParam, SqlResult};

/// Optional listing filters, AND-combined on top of the mandatory owner and
/// soft-delete predicates.
#[derive(Debug, Clone, Default)]
pub struct TodoFilter {
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl TodoFilter {
    /// Parse raw query-string values. Empty strings are treated as absent
    /// (an empty `?search=` filters nothing).
    pub fn from_query(
        completed: Option<&str>,
        priority: Option<&str>,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<Self, FilterError> {
        let completed = match completed.filter(|s| !s.is_empty()) {
            Some(raw) => Some(
                raw.parse::<bool>()
                    .map_err(|_| FilterError::InvalidCompleted(raw.to_string()))?,
            ),
            None => None,
        };

        let priority = match priority.filter(|s| !s.is_empty()) {
            Some(raw) => Some(
                Priority::parse(raw).ok_or_else(|| FilterError::InvalidPriority(raw.to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            completed,
            priority,
            category: category.filter(|s| !s.is_empty()).map(str::to_string),
            search: search.filter(|s| !s.is_empty()).map(str::to_string),
        })
    }

    /// Build the WHERE clause for this filter, scoped to `owner_id`. Always
    /// emits the owner and live-row predicates first; optional conditions
    /// follow in declaration order with `$N` placeholders numbered from 1.
    pub fn to_where_sql(&self, owner_id: Uuid) -> SqlResult {
        let mut builder = WhereBuilder::new();

        let owner = builder.param(SqlParam::Uuid(owner_id));
        builder.push(format!("\"user_id\" = {}", owner));
        builder.push("\"deleted_at\" IS NULL".to_string());

        if let Some(completed) = self.completed {
            let p = builder.param(SqlParam::Bool(completed));
            builder.push(format!("\"completed\" = {}", p));
        }

        if let Some(priority) = self.priority {
            let p = builder.param(SqlParam::Text(priority.as_str().to_string()));
            builder.push(format!("\"priority\" = {}", p));
        }

        if let Some(ref category) = self.category {
            let p = builder.param(SqlParam::Text(category.clone()));
            builder.push(format!("\"category\" = {}", p));
        }

        if let Some(ref search) = self.search {
            let pattern = format!("%{}%", search);
            let title = builder.param(SqlParam::Text(pattern.clone()));
            let description = builder.param(SqlParam::Text(pattern));
            builder.push(format!(
                "(\"title\" LIKE {} OR \"description\" LIKE {})",
                title, description
            ));
        }

        builder.finish()
    }
}

/// Accumulates conditions and ordered bind parameters
struct WhereBuilder {
    conditions: Vec<String>,
    params: Vec<SqlParam>,
}

impl WhereBuilder {
    fn new() -> Self {
        Self {
            conditions: vec![],
            params: vec![],
        }
    }

    fn param(&mut self, value: SqlParam) -> String {
        self.params.push(value);
        format!("${}", self.params.len())
    }

    fn push(&mut self, condition: String) {
        self.conditions.push(condition);
    }

    fn finish(self) -> SqlResult {
        SqlResult {
            query: self.conditions.join(" AND "),
            params: self.params,
        }
    }
}
