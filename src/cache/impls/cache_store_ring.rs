use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use redis::AsyncCommands;
use sha1::{Digest, Sha1};
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_store_ring::{CacheStoreRing, RingShard};
use crate::cache::traits::cache_store::CacheStore;

impl fmt::Debug for RingShard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingShard")
            .field("name", &self.name)
            .field("address", &self.address)
            .field("connection", &"<redis::aio::ConnectionManager>")
            .finish()
    }
}

impl fmt::Debug for CacheStoreRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheStoreRing")
            .field("shards", &self.shards)
            .finish()
    }
}

impl CacheStoreRing {
    /// Connects every shard, given as `(name, address, url)`.
    pub async fn connect(shards: Vec<(String, String, String)>) -> Result<Self, CacheError> {
        if shards.is_empty() {
            return Err(CacheError::ConnectionError("Ring has no shards".to_string()));
        }
        let mut connected = Vec::with_capacity(shards.len());
        for (name, address, url) in shards {
            let client = redis::Client::open(url.as_str())
                .map_err(|e| CacheError::ConnectionError(format!("Failed to create Redis client for shard {} ({}): {}", name, address, e)))?;
            let connection = client
                .get_connection_manager()
                .await
                .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to shard {} ({}): {}", name, address, e)))?;
            connected.push(RingShard {
                name,
                address,
                connection,
            });
        }
        Ok(Self {
            shards: Arc::new(connected),
        })
    }

    pub fn shard_names(&self) -> Vec<&str> {
        self.shards.iter().map(|shard| shard.name.as_str()).collect()
    }

    fn shard_for(&self, key: &str) -> Result<&RingShard, CacheError> {
        rendezvous_index(self.shard_names(), key)
            .and_then(|index| self.shards.get(index))
            .ok_or_else(|| CacheError::ConnectionError("Ring has no shards".to_string()))
    }
}

/// Highest random weight pick: the shard whose `hash(name + key)` is largest
/// owns the key. Removing a shard only moves the keys that shard owned.
pub fn rendezvous_index<'a, I>(names: I, key: &str) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .enumerate()
        .map(|(index, name)| (shard_weight(name, key), index))
        .max()
        .map(|(_, index)| index)
}

fn shard_weight(name: &str, key: &str) -> u64 {
    let mut hasher = Sha1::new();
    hasher.update(name.as_bytes());
    hasher.update(key.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

#[async_trait]
impl CacheStore for CacheStoreRing {
    async fn ping(&self) -> Result<(), CacheError> {
        for shard in self.shards.iter() {
            let mut conn = shard.connection.clone();
            redis::cmd("PING")
                .query_async::<String>(&mut conn)
                .await
                .map_err(CacheError::RedisError)?;
        }
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let shard = self.shard_for(key)?;
        let mut conn = shard.connection.clone();
        let value = conn.get::<_, Option<Vec<u8>>>(key)
            .await
            .map_err(CacheError::RedisError)?;
        debug!("[Redis] Ring get {} on {} hit={}", key, shard.name, value.is_some());
        Ok(value)
    }

    async fn set_ex(&self, key: &str, value: &[u8], ttl: Duration) -> Result<(), CacheError> {
        let shard = self.shard_for(key)?;
        let mut conn = shard.connection.clone();
        conn.set_ex::<_, _, ()>(key, value, ttl.as_secs())
            .await
            .map_err(CacheError::RedisError)?;
        debug!("[Redis] Ring set {} on {} ({} bytes, ttl {}s)", key, shard.name, value.len(), ttl.as_secs());
        Ok(())
    }
}
