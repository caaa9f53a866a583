use sqlx::{Pool, Sqlite};

use crate::snippetdb::errors::SnippetError;
use crate::storage::validate_sqlite_table_schema;

use super::config::DB_TABLE_SNIPPETS;

pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), SnippetError> {
    let table_name = DB_TABLE_SNIPPETS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            created TIMESTAMP NOT NULL,
            expires TIMESTAMP NOT NULL
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

pub(super) async fn validate_snippet_tables_sqlite(
    pool: &Pool<Sqlite>,
) -> Result<(), SnippetError> {
    let expected_columns = [
        ("id", "INTEGER"),
        ("title", "TEXT"),
        ("content", "TEXT"),
        ("created", "TIMESTAMP"),
        ("expires", "TIMESTAMP"),
    ];

    validate_sqlite_table_schema(
        pool,
        DB_TABLE_SNIPPETS.as_str(),
        &expected_columns,
        SnippetError::Storage,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snippetdb::Snippet;
    use chrono::{Duration, Utc};
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> Pool<Sqlite> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");
        create_tables_sqlite(&pool).await.expect("create tables");
        pool
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent_and_valid() {
        let pool = test_pool().await;
        create_tables_sqlite(&pool).await.expect("second create");
        validate_snippet_tables_sqlite(&pool)
            .await
            .expect("schema valid");
    }

    #[tokio::test]
    async fn test_rows_map_onto_snippet() {
        let pool = test_pool().await;
        let table_name = DB_TABLE_SNIPPETS.as_str();
        let created = Utc::now();
        let expires = created + Duration::days(7);

        sqlx::query(&format!(
            "INSERT INTO {table_name} (title, content, created, expires) VALUES (?, ?, ?, ?)"
        ))
        .bind("An old silent pond")
        .bind("A frog jumps into the pond,\nsplash! Silence again.")
        .bind(created)
        .bind(expires)
        .execute(&pool)
        .await
        .unwrap();

        let snippet: Snippet = sqlx::query_as(&format!(
            "SELECT id, title, content, created, expires FROM {table_name}"
        ))
        .fetch_one(&pool)
        .await
        .unwrap();

        assert_eq!(snippet.id, 1);
        assert_eq!(snippet.title, "An old silent pond");
        assert_eq!(snippet.expires.timestamp(), expires.timestamp());
    }

    #[tokio::test]
    async fn test_validation_rejects_foreign_table() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query(&format!(
            "CREATE TABLE {} (id INTEGER PRIMARY KEY, body TEXT)",
            DB_TABLE_SNIPPETS.as_str()
        ))
        .execute(&pool)
        .await
        .unwrap();

        let result = validate_snippet_tables_sqlite(&pool).await;
        assert!(matches!(result, Err(SnippetError::Storage(_))));
    }
}
