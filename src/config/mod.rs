//! Configuration management module.
//!
//! This module handles loading and saving the application configuration from
//! a TOML file and holds the pieces the cache topology resolver consumes.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**: log verbosity for the binary
//! - **error_messages**: parameterized messages for rejected configuration
//! - **cache**: the Redis topology (mode, servers, credentials, prefix, TTL)
//!
//! # Example
//!
//! ```rust,ignore
//! use tilecache_redis::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", true)?;
//! ```
//!
//! A minimal file only needs the servers it talks to:
//!
//! ```toml
//! [cache]
//! mode = "ring"
//! key_prefix = "tiles:"
//! servers = [
//!     { host = "cache-a", port = 6379 },
//!     { host = "cache-b", port = 6379 },
//! ]
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading, defaults and normalization.
pub mod impls;
