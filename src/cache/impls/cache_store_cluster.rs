use std::fmt;
use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use redis::AsyncCommands;
use redis::cluster::ClusterClient;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_store_cluster::CacheStoreCluster;
use crate::cache::traits::cache_store::CacheStore;

impl fmt::Debug for CacheStoreCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheStoreCluster")
            .field("connection", &"<redis::cluster_async::ClusterConnection>")
            .field("nodes", &self.nodes)
            .finish()
    }
}

impl CacheStoreCluster {
    /// `urls` seed the cluster; the client discovers the remaining nodes.
    pub async fn connect(urls: &[String], nodes: Vec<String>) -> Result<Self, CacheError> {
        let client = ClusterClient::new(urls.to_vec())
            .map_err(|e| CacheError::ConnectionError(format!("Failed to create Redis cluster client: {}", e)))?;
        let connection = client
            .get_async_connection()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Redis cluster [{}]: {}", nodes.join(", "), e)))?;
        Ok(Self {
            connection,
            nodes,
        })
    }
}

#[async_trait]
impl CacheStore for CacheStoreCluster {
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
        debug!("[Redis] Cluster get {} hit={}", key, value.is_some());
        Ok(value)
    }

    async fn set_ex(&self, key: &str, value: &[u8], ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        conn.set_ex::<_, _, ()>(key, value, ttl.as_secs())
            .await
            .map_err(CacheError::RedisError)?;
        debug!("[Redis] Cluster set {} ({} bytes, ttl {}s)", key, value.len(), ttl.as_secs());
        Ok(())
    }
}
