use std::fmt;
use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use redis::AsyncCommands;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_store_standalone::CacheStoreStandalone;
use crate::cache::traits::cache_store::CacheStore;

impl fmt::Debug for CacheStoreStandalone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheStoreStandalone")
            .field("connection", &"<redis::aio::ConnectionManager>")
            .field("address", &self.address)
            .finish()
    }
}

impl CacheStoreStandalone {
    pub async fn connect(url: &str, address: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url)
            .map_err(|e| CacheError::ConnectionError(format!("Failed to create Redis client for {}: {}", address, e)))?;
        let connection = client
            .get_connection_manager()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Redis at {}: {}", address, e)))?;
        Ok(Self {
            connection,
            address: address.to_string(),
        })
    }
}

#[async_trait]
impl CacheStore for CacheStoreStandalone {
    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut conn = self.connection.clone();
        let value = conn.get::<_, Option<Vec<u8>>>(key)
            .await
            .map_err(CacheError::RedisError)?;
        debug!("[Redis] Get {} hit={}", key, value.is_some());
        Ok(value)
    }

    async fn set_ex(&self, key: &str, value: &[u8], ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        conn.set_ex::<_, _, ()>(key, value, ttl.as_secs())
            .await
            .map_err(CacheError::RedisError)?;
        debug!("[Redis] Set {} ({} bytes, ttl {}s)", key, value.len(), ttl.as_secs());
        Ok(())
    }
}
