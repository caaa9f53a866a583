use crate::snippetdb::errors::SnippetError;
use crate::storage::{DataStore, GENERIC_DATA_STORE};

use super::postgres::*;
use super::sqlite::*;

pub struct SnippetStore;

impl SnippetStore {
    /// Initialize the snippets table
    pub(crate) async fn init() -> Result<(), SnippetError> {
        match &*GENERIC_DATA_STORE {
            DataStore::Sqlite(pool) => {
                create_tables_sqlite(pool).await?;
                validate_snippet_tables_sqlite(pool).await
            }
            DataStore::Postgres(pool) => {
                create_tables_postgres(pool).await?;
                validate_snippet_tables_postgres(pool).await
            }
        }
    }
}
