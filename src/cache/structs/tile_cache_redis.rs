use std::sync::Arc;
use crate::cache::enums::redis_topology::RedisTopology;
use crate::cache::traits::cache_store::CacheStore;
use crate::config::structs::cache_config::CacheConfig;

/// Tile cache on top of a Redis topology.
///
/// Holds the normalized configuration, the resolved topology and the store;
/// all three are fixed for the lifetime of the adapter. Cloning is cheap and
/// clones share the same connections.
#[derive(Clone)]
pub struct TileCacheRedis {
    pub(crate) config: Arc<CacheConfig>,
    pub(crate) topology: Arc<RedisTopology>,
    pub(crate) store: Arc<dyn CacheStore>,
}
