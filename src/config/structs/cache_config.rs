use serde::{Deserialize, Serialize};
use crate::config::structs::server_address::ServerAddress;

/// Redis topology configuration for the tile cache.
///
/// Either `servers` or the `host`/`port` shorthand may be given, never both.
/// The shorthand is folded into `servers` by [`CacheConfig::normalize`], after
/// which `servers` is never empty, `ttl` is positive and `mode` is one of
/// `standalone`, `cluster` or `ring`.
///
/// `mode` is kept as a plain string so an unknown value is reported together
/// with the allowed set instead of failing the whole file parse.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
    pub mode: String,
    pub host: String,
    pub port: u16,
    pub servers: Vec<ServerAddress>,
    /// Logical database index. Must stay 0 in cluster mode.
    pub database: i64,
    pub key_prefix: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Seconds an entry stays valid, 0 selects the default of one day.
    pub ttl: u32,
    /// Per call bound in milliseconds, 0 leaves calls unbounded.
    pub timeout: u64,
}
