//! Cache trait definitions.

/// Byte store with expiry, implemented once per topology.
pub mod cache_store;

/// Lookup/save capability consumed by the tile server.
pub mod tile_cache;
