use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid completed value: {0}")]
    InvalidCompleted(String),

    #[error("Invalid priority value: {0}")]
    InvalidPriority(String),

    #[error("Invalid page value: {0}")]
    InvalidPage(String),

    #[error("Invalid limit value: {0}")]
    InvalidLimit(String),
}
