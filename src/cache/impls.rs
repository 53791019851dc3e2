//! Implementation blocks for cache types.

pub mod cache_store_cluster;

pub mod cache_store_memory;

pub mod cache_store_ring;

pub mod cache_store_standalone;

pub mod redis_credentials;

pub mod redis_mode;

pub mod redis_topology;

pub mod tile_cache_redis;
