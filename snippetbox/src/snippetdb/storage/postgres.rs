use sqlx::{Pool, Postgres};

use crate::snippetdb::errors::SnippetError;
use crate::storage::validate_postgres_table_schema;

use super::config::DB_TABLE_SNIPPETS;

pub(super) async fn create_tables_postgres(pool: &Pool<Postgres>) -> Result<(), SnippetError> {
    let table_name = DB_TABLE_SNIPPETS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            created TIMESTAMPTZ NOT NULL,
            expires TIMESTAMPTZ NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await?;

    sqlx::query(&format!(
        "CREATE INDEX IF NOT EXISTS idx_{table_name}_created ON {table_name}(created)"
    ))
    .execute(pool)
    .await?;

    Ok(())
}

pub(super) async fn validate_snippet_tables_postgres(
    pool: &Pool<Postgres>,
) -> Result<(), SnippetError> {
    let expected_columns = [
        ("id", "bigint"),
        ("title", "text"),
        ("content", "text"),
        ("created", "timestamp with time zone"),
        ("expires", "timestamp with time zone"),
    ];

    validate_postgres_table_schema(
        pool,
        DB_TABLE_SNIPPETS.as_str(),
        &expected_columns,
        SnippetError::Storage,
    )
    .await
}
