//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Redis topology settings for the tile cache.
pub mod cache_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// Parameterized messages for configuration errors.
pub mod error_messages;

/// A single `host:port` cache node.
pub mod server_address;
