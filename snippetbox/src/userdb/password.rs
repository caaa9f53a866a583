//! bcrypt password hashing
//!
//! Both operations run on the blocking thread pool.

use crate::config::PASSWORD_HASH_COST;

use super::errors::UserError;

/// Hash `password` with a fresh salt at the configured cost.
pub(super) async fn hash_password(password: &str) -> Result<String, UserError> {
    hash_password_with_cost(password, *PASSWORD_HASH_COST).await
}

pub(super) async fn hash_password_with_cost(
    password: &str,
    cost: u32,
) -> Result<String, UserError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| UserError::PasswordHash(e.to_string()))?
        .map_err(UserError::from)
}

/// Compare `password` against a stored hash.
///
/// `Ok(false)` means the password does not match; a malformed stored hash is
/// an error, never a match.
pub(super) async fn verify_password(password: &str, hashed: &str) -> Result<bool, UserError> {
    let password = password.to_owned();
    let hashed = hashed.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hashed))
        .await
        .map_err(|e| UserError::PasswordHash(e.to_string()))?
        .map_err(UserError::from)
}
