//! Cache structures.

/// Credentials shared by every node of a topology.
pub mod redis_credentials;

/// Single server store.
pub mod cache_store_standalone;

/// Redis Cluster store.
pub mod cache_store_cluster;

/// Client side sharded ring store.
pub mod cache_store_ring;

/// In-process store with expiry, for embedding and tests.
pub mod cache_store_memory;

/// The tile cache adapter.
pub mod tile_cache_redis;
