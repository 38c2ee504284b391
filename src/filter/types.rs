use uuid::Uuid;

/// A bind parameter for a dynamically-built query. Keeps parameters typed so
/// they reach the driver with the right Postgres type (uuid columns cannot be
/// compared against text-typed parameters).
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Bool(bool),
    Text(String),
    Uuid(Uuid),
}

/// A generated SQL fragment or statement plus its ordered `$N` parameters
#[derive(Debug, Clone)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<SqlParam>,
}
