use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::storage::errors::StorageError;
use crate::storage::types::CacheData;

pub(crate) struct InMemoryEntry {
    pub(super) data: CacheData,
    pub(super) expires_at: DateTime<Utc>,
}

pub(crate) struct InMemoryCacheStore {
    pub(super) entry: HashMap<String, InMemoryEntry>,
}

pub(crate) struct RedisCacheStore {
    pub(super) client: redis::Client,
}

/// Key/value store holding short-lived data such as sessions.
#[async_trait]
pub(crate) trait CacheStore: Send + Sync + 'static {
    /// Initialize the store. This is called once at startup.
    async fn init(&self) -> Result<(), StorageError>;

    /// Put a value into the store; it disappears after `ttl` seconds.
    async fn put_with_ttl(
        &mut self,
        prefix: &str,
        key: &str,
        value: CacheData,
        ttl: usize,
    ) -> Result<(), StorageError>;

    /// Get a value from the store. Expired values are reported as absent.
    async fn get(&self, prefix: &str, key: &str) -> Result<Option<CacheData>, StorageError>;

    /// Remove a value from the store. Removing a missing key is not an error.
    async fn remove(&mut self, prefix: &str, key: &str) -> Result<(), StorageError>;
}
