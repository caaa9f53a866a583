use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use crate::storage::validate_postgres_table_schema;
use crate::userdb::{
    errors::{UserError, map_insert_error},
    types::{StoredCredentials, User},
};

use super::config::DB_TABLE_USERS;

// PostgreSQL implementations
pub(super) async fn create_tables_postgres(pool: &Pool<Postgres>) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            hashed_password TEXT NOT NULL,
            created TIMESTAMPTZ NOT NULL,
            CONSTRAINT {table_name}_uc_email UNIQUE (email)
        )
        "#
    ))
    .execute(pool)
    .await?;

    Ok(())
}

/// Validates that the users table schema matches what we expect
pub(super) async fn validate_user_tables_postgres(pool: &Pool<Postgres>) -> Result<(), UserError> {
    let expected_columns = [
        ("id", "bigint"),
        ("name", "text"),
        ("email", "text"),
        ("hashed_password", "text"),
        ("created", "timestamp with time zone"),
    ];

    validate_postgres_table_schema(
        pool,
        DB_TABLE_USERS.as_str(),
        &expected_columns,
        UserError::Storage,
    )
    .await
}

pub(super) async fn insert_user_postgres(
    pool: &Pool<Postgres>,
    name: &str,
    email: &str,
    hashed_password: &str,
    created: DateTime<Utc>,
) -> Result<i64, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query_scalar::<_, i64>(&format!(
        r#"
        INSERT INTO {table_name} (name, email, hashed_password, created)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#
    ))
    .bind(name)
    .bind(email)
    .bind(hashed_password)
    .bind(created)
    .fetch_one(pool)
    .await
    .map_err(map_insert_error)
}

pub(super) async fn get_credentials_postgres(
    pool: &Pool<Postgres>,
    email: &str,
) -> Result<Option<StoredCredentials>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    Ok(sqlx::query_as::<_, StoredCredentials>(&format!(
        r#"
        SELECT id, hashed_password FROM {table_name} WHERE email = $1
        "#
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?)
}

pub(super) async fn get_user_postgres(
    pool: &Pool<Postgres>,
    id: i64,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    Ok(sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT id, name, email, hashed_password, created FROM {table_name} WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?)
}
