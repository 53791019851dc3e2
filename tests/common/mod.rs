#![allow(dead_code)]
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use tilecache_redis::cache::errors::CacheError;
use tilecache_redis::cache::structs::cache_store_memory::CacheStoreMemory;
use tilecache_redis::cache::structs::tile_cache_redis::TileCacheRedis;
use tilecache_redis::cache::traits::cache_store::CacheStore;
use tilecache_redis::config::structs::cache_config::CacheConfig;
use tilecache_redis::config::structs::error_messages::ErrorMessages;
use tilecache_redis::config::structs::server_address::ServerAddress;
use tilecache_redis::tile::structs::tile_image::TileImage;

pub fn create_test_config(prefix: &str) -> CacheConfig {
    CacheConfig {
        key_prefix: prefix.to_string(),
        ..Default::default()
    }
}

pub fn servers(list: &[(&str, u16)]) -> Vec<ServerAddress> {
    list.iter().map(|(host, port)| ServerAddress::new(host, *port)).collect()
}

pub fn create_test_cache(prefix: &str, store: &CacheStoreMemory) -> TileCacheRedis {
    TileCacheRedis::with_store(&create_test_config(prefix), &ErrorMessages::default(), Arc::new(store.clone()))
        .expect("test config is valid")
}

pub fn create_test_image(size: usize) -> TileImage {
    let content = (0..size).map(|i| (i % 251) as u8).collect();
    TileImage::new(content, "image/png")
}

/// Store that never answers within a reasonable time.
pub struct SlowStore {
    pub delay: Duration,
}

#[async_trait]
impl CacheStore for SlowStore {
    async fn ping(&self) -> Result<(), CacheError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        tokio::time::sleep(self.delay).await;
        Ok(None)
    }

    async fn set_ex(&self, _key: &str, _value: &[u8], _ttl: Duration) -> Result<(), CacheError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Store whose every call fails, as an unreachable server would.
pub struct FailingStore;

#[async_trait]
impl CacheStore for FailingStore {
    async fn ping(&self) -> Result<(), CacheError> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn set_ex(&self, _key: &str, _value: &[u8], _ttl: Duration) -> Result<(), CacheError> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }
}

/// Store that records the TTL it was handed.
#[derive(Default)]
pub struct RecordingStore {
    pub inner: CacheStoreMemory,
    pub ttls: parking_lot::Mutex<Vec<(String, Duration)>>,
}

#[async_trait]
impl CacheStore for RecordingStore {
    async fn ping(&self) -> Result<(), CacheError> {
        self.inner.ping().await
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        self.inner.get(key).await
    }

    async fn set_ex(&self, key: &str, value: &[u8], ttl: Duration) -> Result<(), CacheError> {
        self.ttls.lock().push((key.to_string(), ttl));
        self.inner.set_ex(key, value, ttl).await
    }
}
