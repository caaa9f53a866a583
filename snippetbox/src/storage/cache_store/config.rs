use std::{env, sync::LazyLock};
use tokio::sync::Mutex;

use super::types::{CacheStore, InMemoryCacheStore, RedisCacheStore};

static GENERIC_CACHE_STORE_TYPE: LazyLock<String> = LazyLock::new(|| {
    env::var("GENERIC_CACHE_STORE_TYPE").unwrap_or_else(|_| "memory".to_string())
});

static GENERIC_CACHE_STORE_URL: LazyLock<String> =
    LazyLock::new(|| env::var("GENERIC_CACHE_STORE_URL").unwrap_or_default());

pub(crate) static GENERIC_CACHE_STORE: LazyLock<Mutex<Box<dyn CacheStore>>> =
    LazyLock::new(|| {
        let store_type = GENERIC_CACHE_STORE_TYPE.as_str();
        let store_url = GENERIC_CACHE_STORE_URL.as_str();

        tracing::info!(
            "Initializing cache store with type: {}, url: {}",
            store_type,
            store_url
        );

        let store = build_cache_store(store_type, store_url).unwrap_or_else(|e| {
            tracing::error!("{}", e);
            panic!("{e}")
        });

        Mutex::new(store)
    });

fn build_cache_store(store_type: &str, store_url: &str) -> Result<Box<dyn CacheStore>, String> {
    match store_type {
        "memory" => Ok(Box::new(InMemoryCacheStore::new())),
        // The connection itself is verified by `CacheStore::init` at startup
        "redis" => redis::Client::open(store_url)
            .map(|client| Box::new(RedisCacheStore { client }) as Box<dyn CacheStore>)
            .map_err(|e| format!("Failed to create Redis client: {e}")),
        t => Err(format!(
            "Unsupported cache store type: {t}. Supported types are 'memory' and 'redis'"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_memory_store() {
        assert!(build_cache_store("memory", "").is_ok());
    }

    #[test]
    fn test_build_redis_store_does_not_connect() {
        assert!(build_cache_store("redis", "redis://127.0.0.1:6379").is_ok());
    }

    #[test]
    fn test_bad_redis_url() {
        let err = build_cache_store("redis", "not a url").err().unwrap();
        assert!(err.contains("Failed to create Redis client"));
    }

    #[test]
    fn test_unsupported_cache_store_type() {
        let err = build_cache_store("memcached", "").err().unwrap();
        assert!(err.contains("Unsupported cache store type: memcached"));
    }
}
