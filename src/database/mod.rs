pub mod manager;
pub mod models;
pub mod query_builder;
pub mod todos;
pub mod users;

pub use manager::{connect_pool, health_check, DatabaseError};
pub use todos::{TodoRepository, TodoStats};
pub use users::UserRepository;
