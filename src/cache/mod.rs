//! Remote tile cache backed by Redis.
//!
//! Rendered tiles are stored in an external Redis deployment so every
//! instance of the tile server shares one cache and repeated requests for a
//! tile skip rendering.
//!
//! # Topologies
//!
//! - **standalone**: one server, optional logical database
//! - **cluster**: Redis Cluster, a single keyspace spread over many nodes
//! - **ring**: independent servers, keys sharded client side by rendezvous
//!   hashing
//!
//! # Architecture
//!
//! - `CacheConfig::normalize` turns the raw configuration into a validated
//!   copy and a `RedisTopology`
//! - `RedisTopology::connect` opens the matching `CacheStore`
//! - `TileCacheRedis` owns the store and implements the `TileCache` trait
//!   (`lookup` / `save`), building keys and applying the TTL
//! - values pass through the `codec` module (MessagePack, LZ4 above a size
//!   threshold)
//!
//! # Example
//!
//! ```rust,ignore
//! use tilecache_redis::cache::structs::tile_cache_redis::TileCacheRedis;
//! use tilecache_redis::cache::traits::tile_cache::TileCache;
//!
//! let cache = TileCacheRedis::construct(&config.cache, &config.error_messages).await?;
//! cache.save(&request, &image).await?;
//! let cached = cache.lookup(&request).await?;
//! ```

/// Value encoding for stored tiles.
pub mod codec;

/// Topology enumerations (mode, resolved topology).
pub mod enums;

/// Error types for topology resolution and cache operations.
pub mod errors;

/// Implementation blocks for stores, topology and the adapter.
pub mod impls;

/// Data structures for stores and the adapter.
pub mod structs;

/// Store and tile cache trait definitions.
pub mod traits;
