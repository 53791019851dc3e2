use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use log::info;
use crate::cache::codec;
use crate::cache::enums::redis_topology::RedisTopology;
use crate::cache::errors::CacheError;
use crate::cache::structs::redis_credentials::RedisCredentials;
use crate::cache::structs::tile_cache_redis::TileCacheRedis;
use crate::cache::traits::cache_store::CacheStore;
use crate::cache::traits::tile_cache::TileCache;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::error_messages::ErrorMessages;
use crate::tile::structs::tile_image::TileImage;
use crate::tile::structs::tile_request::TileRequest;

impl fmt::Debug for TileCacheRedis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileCacheRedis")
            .field("topology", &self.topology)
            .field("key_prefix", &self.config.key_prefix)
            .field("ttl", &self.config.ttl)
            .field("store", &"<dyn CacheStore>")
            .finish()
    }
}

impl TileCacheRedis {
    /// Validates `config` and connects to the topology it describes.
    ///
    /// Fails without connecting when the configuration is rejected.
    pub async fn construct(config: &CacheConfig, messages: &ErrorMessages) -> Result<TileCacheRedis, CacheError> {
        let (config, topology) = config.normalize(messages)?;
        let store = topology.connect(&RedisCredentials::from(&config)).await?;
        info!("[Cache] Connected to Redis {}", topology);
        Ok(TileCacheRedis {
            config: Arc::new(config),
            topology: Arc::new(topology),
            store,
        })
    }

    /// Validates `config` like [`TileCacheRedis::construct`] but uses `store`
    /// instead of connecting.
    pub fn with_store(config: &CacheConfig, messages: &ErrorMessages, store: Arc<dyn CacheStore>) -> Result<TileCacheRedis, CacheError> {
        let (config, topology) = config.normalize(messages)?;
        Ok(TileCacheRedis {
            config: Arc::new(config),
            topology: Arc::new(topology),
            store,
        })
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn topology(&self) -> &RedisTopology {
        &self.topology
    }

    pub fn key_for(&self, request: &TileRequest) -> String {
        format!("{}{}", self.config.key_prefix, request)
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(u64::from(self.config.ttl))
    }

    pub async fn ping(&self) -> Result<(), CacheError> {
        self.bounded("PING", self.store.ping()).await
    }

    async fn bounded<T, F>(&self, key: &str, call: F) -> Result<T, CacheError>
    where
        F: Future<Output = Result<T, CacheError>>,
    {
        if self.config.timeout == 0 {
            return call.await;
        }
        match tokio::time::timeout(Duration::from_millis(self.config.timeout), call).await {
            Ok(result) => result,
            Err(_) => Err(CacheError::Timeout(key.to_string())),
        }
    }
}

#[async_trait]
impl TileCache for TileCacheRedis {
    async fn lookup(&self, request: &TileRequest) -> Result<TileImage, CacheError> {
        let key = self.key_for(request);
        match self.bounded(&key, self.store.get(&key)).await? {
            Some(data) => codec::decode(&data),
            None => Err(CacheError::KeyNotFound(key)),
        }
    }

    async fn save(&self, request: &TileRequest, image: &TileImage) -> Result<(), CacheError> {
        let key = self.key_for(request);
        let data = codec::encode(image)?;
        self.bounded(&key, self.store.set_ex(&key, &data, self.ttl())).await
    }
}
