//! Data store configuration

use std::{env, str::FromStr, sync::LazyLock};

use super::types::DataStore;

// Configuration
static GENERIC_DATA_STORE_TYPE: LazyLock<String> = LazyLock::new(|| {
    env::var("GENERIC_DATA_STORE_TYPE").expect("GENERIC_DATA_STORE_TYPE must be set")
});

static GENERIC_DATA_STORE_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("GENERIC_DATA_STORE_URL").expect("GENERIC_DATA_STORE_URL must be set")
});

pub(crate) static GENERIC_DATA_STORE: LazyLock<DataStore> = LazyLock::new(|| {
    let store_type = GENERIC_DATA_STORE_TYPE.as_str();
    let store_url = GENERIC_DATA_STORE_URL.as_str();

    tracing::info!(
        "Initializing data store with type: {}, url: {}",
        store_type,
        store_url
    );

    let store = build_data_store(store_type, store_url).unwrap_or_else(|e| panic!("{e}"));

    tracing::info!("Data store pool ready: type={}", store.kind());

    store
});

fn build_data_store(store_type: &str, store_url: &str) -> Result<DataStore, String> {
    match store_type {
        "sqlite" => {
            let opts = sqlx::sqlite::SqliteConnectOptions::from_str(store_url)
                .map_err(|e| format!("Failed to parse SQLite connection string: {e}"))?
                .create_if_missing(true);

            Ok(DataStore::Sqlite(
                sqlx::sqlite::SqlitePool::connect_lazy_with(opts),
            ))
        }
        "postgres" => sqlx::PgPool::connect_lazy(store_url)
            .map(DataStore::Postgres)
            .map_err(|e| format!("Failed to create Postgres pool: {e}")),
        t => Err(format!(
            "Unsupported store type: {t}. Supported types are 'sqlite' and 'postgres'"
        )),
    }
}

/// Table prefix from environment variable
pub(crate) static DB_TABLE_PREFIX: LazyLock<String> =
    LazyLock::new(|| env::var("DB_TABLE_PREFIX").unwrap_or_else(|_| "sb_".to_string()));
