mod cache_store;
mod data_store;
mod errors;
mod schema_validation;
mod types;

/// Open the data store pool and the session cache store.
///
/// Both stores are built lazily from the environment; this forces them so that
/// configuration errors surface at startup rather than on the first request.
pub(crate) async fn init() -> Result<(), StorageError> {
    let _ = &*data_store::GENERIC_DATA_STORE;
    GENERIC_CACHE_STORE.lock().await.init().await?;

    Ok(())
}

pub(crate) use cache_store::GENERIC_CACHE_STORE;
pub(crate) use data_store::{DB_TABLE_PREFIX, DataStore, GENERIC_DATA_STORE};
pub(crate) use errors::StorageError;
pub(crate) use schema_validation::{validate_postgres_table_schema, validate_sqlite_table_schema};
pub(crate) use types::CacheData;
