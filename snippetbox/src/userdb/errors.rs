use thiserror::Error;

/// Outcomes of user model operations.
///
/// `DuplicateEmail` and `InvalidCredentials` are sentinel conditions: callers
/// match on them without looking at store-specific error codes.
#[derive(Clone, Error, Debug, PartialEq)]
pub enum UserError {
    /// The email address is already registered
    #[error("Duplicate email")]
    DuplicateEmail,

    /// Unknown email or wrong password; deliberately indistinguishable
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for UserError {
    fn from(err: sqlx::Error) -> Self {
        UserError::Storage(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for UserError {
    fn from(err: bcrypt::BcryptError) -> Self {
        UserError::PasswordHash(err.to_string())
    }
}

/// True when `err` is a unique-constraint violation on the users email column.
///
/// PostgreSQL reports the constraint name (`<table>_uc_email`); SQLite only
/// names the offending column in its message (`UNIQUE constraint failed: <table>.email`).
pub(super) fn is_duplicate_email(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            db_err
                .constraint()
                .is_some_and(|name| name.ends_with("_uc_email"))
                || db_err.message().ends_with(".email")
        }
        _ => false,
    }
}

/// Translate an insert failure, surfacing the duplicate email sentinel.
pub(super) fn map_insert_error(err: sqlx::Error) -> UserError {
    if is_duplicate_email(&err) {
        UserError::DuplicateEmail
    } else {
        UserError::from(err)
    }
}
