use bcrypt::{hash, verify, DEFAULT_COST};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailure(String),
}

/// One-way bcrypt hash with the library's default cost factor. Salting is
/// handled by bcrypt itself; two hashes of the same password differ.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    hash(password, DEFAULT_COST).map_err(|e| PasswordError::HashingFailure(e.to_string()))
}

/// Compares a plaintext candidate against a stored hash. A mismatch is
/// `Ok(false)`, not an error; only a malformed stored hash errors.
pub fn verify_password(password: &str, hashed: &str) -> Result<bool, PasswordError> {
    verify(password, hashed).map_err(|e| PasswordError::HashingFailure(e.to_string()))
}
