//! # tilecache-redis
//!
//! A remote tile cache backed by Redis (or any Redis protocol compatible
//! server such as Valkey). Rendered tile images are stored under a prefixed
//! key with an expiry, so repeated requests for the same tile skip the
//! render pipeline.
//!
//! ## Topologies
//!
//! - **standalone**: a single server, optional logical database selection
//! - **cluster**: a Redis Cluster addressed as one keyspace
//! - **ring**: client side sharding over independent servers using
//!   rendezvous hashing
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tilecache_redis::cache::structs::tile_cache_redis::TileCacheRedis;
//! use tilecache_redis::cache::traits::tile_cache::TileCache;
//! use tilecache_redis::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let cache = TileCacheRedis::construct(&config.cache, &config.error_messages).await?;
//!
//! match cache.lookup(&request).await {
//!     Ok(image) => serve(image),
//!     Err(_) => {
//!         let image = render(&request);
//!         let _ = cache.save(&request, &image).await;
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`cache`] - topology resolution, stores and the tile cache adapter
//! - [`config`] - configuration structures, TOML loading and the error catalog
//! - [`logging`] - log output setup for the binary
//! - [`structs`] - CLI argument parsing
//! - [`tile`] - tile request identity and image payload types

/// Remote tile cache: topology resolution, stores and the adapter.
pub mod cache;

/// Configuration management module.
///
/// Handles loading and saving the TOML configuration file, and holds the
/// error message catalog used when a topology configuration is rejected.
pub mod config;

/// Log output setup using fern.
pub mod logging;

/// CLI argument parsing for the `tilecache-redis` binary.
pub mod structs;

/// Tile request identity and image payload types.
pub mod tile;
