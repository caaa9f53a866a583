use chrono::Utc;

use crate::storage::{DataStore, GENERIC_DATA_STORE};
use crate::userdb::{
    errors::UserError,
    password::{hash_password, verify_password},
    types::User,
};

use super::postgres::*;
use super::sqlite::*;

pub struct UserStore;

impl UserStore {
    /// Initialize the users table
    pub(crate) async fn init() -> Result<(), UserError> {
        match &*GENERIC_DATA_STORE {
            DataStore::Sqlite(pool) => {
                create_tables_sqlite(pool).await?;
                validate_user_tables_sqlite(pool).await
            }
            DataStore::Postgres(pool) => {
                create_tables_postgres(pool).await?;
                validate_user_tables_postgres(pool).await
            }
        }
    }

    /// Register a new user and return its id.
    ///
    /// The password is stored only as a bcrypt hash. An email that is already
    /// registered yields [`UserError::DuplicateEmail`].
    #[tracing::instrument(skip(password))]
    pub async fn insert(name: &str, email: &str, password: &str) -> Result<i64, UserError> {
        let hashed_password = hash_password(password).await?;
        let created = Utc::now();

        let result = match &*GENERIC_DATA_STORE {
            DataStore::Sqlite(pool) => {
                insert_user_sqlite(pool, name, email, &hashed_password, created).await
            }
            DataStore::Postgres(pool) => {
                insert_user_postgres(pool, name, email, &hashed_password, created).await
            }
        };

        match &result {
            Ok(id) => tracing::info!(user_id = id, "User registered"),
            Err(UserError::DuplicateEmail) => tracing::debug!("Email already registered"),
            Err(e) => tracing::error!(error = %e, "User insert failed"),
        }

        result
    }

    /// Check an email/password pair and return the matching user id.
    ///
    /// Unknown email and wrong password both yield [`UserError::InvalidCredentials`].
    #[tracing::instrument(skip(password))]
    pub async fn authenticate(email: &str, password: &str) -> Result<i64, UserError> {
        let credentials = match &*GENERIC_DATA_STORE {
            DataStore::Sqlite(pool) => get_credentials_sqlite(pool, email).await?,
            DataStore::Postgres(pool) => get_credentials_postgres(pool, email).await?,
        };

        let Some(credentials) = credentials else {
            tracing::debug!("No user with that email");
            return Err(UserError::InvalidCredentials);
        };

        if verify_password(password, &credentials.hashed_password).await? {
            tracing::debug!(user_id = credentials.id, "Credentials accepted");
            Ok(credentials.id)
        } else {
            tracing::debug!("Password mismatch");
            Err(UserError::InvalidCredentials)
        }
    }

    /// Get a user by id
    #[tracing::instrument]
    pub async fn get(id: i64) -> Result<Option<User>, UserError> {
        match &*GENERIC_DATA_STORE {
            DataStore::Sqlite(pool) => get_user_sqlite(pool, id).await,
            DataStore::Postgres(pool) => get_user_postgres(pool, id).await,
        }
    }
}
