use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use crate::cache::enums::redis_mode::RedisMode;
use crate::cache::enums::redis_topology::RedisTopology;
use crate::cache::errors::{CacheError, TopologyError};
use crate::cache::structs::cache_store_cluster::CacheStoreCluster;
use crate::cache::structs::cache_store_ring::CacheStoreRing;
use crate::cache::structs::cache_store_standalone::CacheStoreStandalone;
use crate::cache::structs::redis_credentials::RedisCredentials;
use crate::cache::traits::cache_store::CacheStore;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::error_messages::ErrorMessages;
use crate::config::structs::server_address::ServerAddress;

impl RedisTopology {
    /// Checks the mode specific constraints on an already defaulted
    /// configuration and builds the matching variant.
    pub(crate) fn resolve(mode: RedisMode, config: &CacheConfig, messages: &ErrorMessages) -> Result<RedisTopology, TopologyError> {
        match mode {
            RedisMode::standalone => {
                let server = config.servers.first().cloned().ok_or_else(|| TopologyError::InvalidParam {
                    field: CacheConfig::FIELD_SERVERS_LENGTH.to_string(),
                    value: "0".to_string(),
                    message: messages.invalid_param(CacheConfig::FIELD_SERVERS_LENGTH, &0),
                })?;
                Ok(RedisTopology::Standalone {
                    server,
                    database: config.database,
                })
            }
            RedisMode::cluster => {
                if config.database != 0 {
                    return Err(TopologyError::MutuallyExclusive {
                        first: CacheConfig::FIELD_DATABASE.to_string(),
                        second: CacheConfig::FIELD_MODE.to_string(),
                        message: messages.params_mutually_exclusive(CacheConfig::FIELD_DATABASE, CacheConfig::FIELD_MODE),
                    });
                }
                Ok(RedisTopology::Cluster {
                    servers: config.servers.clone(),
                })
            }
            RedisMode::ring => {
                let shards = Self::ring_shards(&config.servers);
                let count = shards.len();
                if count < 2 {
                    return Err(TopologyError::InvalidParam {
                        field: CacheConfig::FIELD_SERVERS_LENGTH.to_string(),
                        value: count.to_string(),
                        message: messages.invalid_param(CacheConfig::FIELD_SERVERS_LENGTH, &count),
                    });
                }
                Ok(RedisTopology::Ring {
                    shards,
                    database: config.database,
                })
            }
        }
    }

    /// Names each shard after its host. Hosts listed more than once fall back
    /// to `host:port` so no node is dropped from the ring; an exact repeat of
    /// the same `host:port` collapses into one shard.
    fn ring_shards(servers: &[ServerAddress]) -> BTreeMap<String, ServerAddress> {
        let mut host_counts: HashMap<&str, usize> = HashMap::new();
        for server in servers {
            *host_counts.entry(server.host.as_str()).or_default() += 1;
        }
        servers
            .iter()
            .map(|server| {
                let name = if host_counts.get(server.host.as_str()).copied().unwrap_or(0) > 1 {
                    server.to_string()
                } else {
                    server.host.clone()
                };
                (name, server.clone())
            })
            .collect()
    }

    pub fn mode(&self) -> RedisMode {
        match self {
            RedisTopology::Standalone { .. } => RedisMode::standalone,
            RedisTopology::Cluster { .. } => RedisMode::cluster,
            RedisTopology::Ring { .. } => RedisMode::ring,
        }
    }

    /// Every node the topology addresses.
    pub fn servers(&self) -> Vec<&ServerAddress> {
        match self {
            RedisTopology::Standalone { server, .. } => vec![server],
            RedisTopology::Cluster { servers } => servers.iter().collect(),
            RedisTopology::Ring { shards, .. } => shards.values().collect(),
        }
    }

    /// Opens the store for this topology. Connections are made eagerly so an
    /// unreachable node fails construction rather than the first lookup.
    pub async fn connect(&self, credentials: &RedisCredentials) -> Result<Arc<dyn CacheStore>, CacheError> {
        match self {
            RedisTopology::Standalone { server, database } => {
                let url = credentials.connection_url(server, Some(*database));
                let store = CacheStoreStandalone::connect(&url, &server.to_string()).await?;
                Ok(Arc::new(store))
            }
            RedisTopology::Cluster { servers } => {
                let urls: Vec<String> = servers
                    .iter()
                    .map(|server| credentials.connection_url(server, None))
                    .collect();
                let store = CacheStoreCluster::connect(&urls, servers.iter().map(|server| server.to_string()).collect()).await?;
                Ok(Arc::new(store))
            }
            RedisTopology::Ring { shards, database } => {
                let mut ring = Vec::with_capacity(shards.len());
                for (name, server) in shards {
                    ring.push((name.clone(), server.to_string(), credentials.connection_url(server, Some(*database))));
                }
                let store = CacheStoreRing::connect(ring).await?;
                Ok(Arc::new(store))
            }
        }
    }
}

impl fmt::Display for RedisTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let servers: Vec<String> = self.servers().iter().map(|server| server.to_string()).collect();
        write!(f, "{} [{}]", self.mode(), servers.join(", "))
    }
}
