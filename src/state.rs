use sqlx::PgPool;

use crate::auth::JwtService;

/// Shared application state, built once in main and cloned per request.
/// Components receive their dependencies through this instead of reading
/// globals, so tests can construct them with fakes.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub jwt: JwtService,
}

impl AppState {
    pub fn new(pool: PgPool, jwt: JwtService) -> Self {
        Self { pool, jwt }
    }
}
