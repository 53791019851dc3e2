use std::str::FromStr;
use crate::cache::enums::redis_mode::RedisMode;
use crate::cache::enums::redis_topology::RedisTopology;
use crate::cache::errors::TopologyError;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::error_messages::ErrorMessages;
use crate::config::structs::server_address::ServerAddress;

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            mode: String::new(),
            host: String::new(),
            port: 0,
            servers: Vec::new(),
            database: 0,
            key_prefix: String::new(),
            username: None,
            password: None,
            ttl: 0,
            timeout: 0,
        }
    }
}

impl CacheConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 6379;
    pub const DEFAULT_TTL: u32 = 60 * 60 * 24;

    pub const FIELD_MODE: &'static str = "cache.redis.mode";
    pub const FIELD_HOST: &'static str = "cache.redis.host";
    pub const FIELD_SERVERS: &'static str = "cache.redis.servers";
    pub const FIELD_DATABASE: &'static str = "cache.redis.database";
    pub const FIELD_SERVERS_LENGTH: &'static str = "length(cache.redis.servers)";

    /// Values written into a freshly generated config file.
    pub fn init() -> CacheConfig {
        CacheConfig {
            mode: RedisMode::standalone.to_string(),
            host: String::from(Self::DEFAULT_HOST),
            port: Self::DEFAULT_PORT,
            key_prefix: String::from("tile:"),
            ttl: Self::DEFAULT_TTL,
            ..Default::default()
        }
    }

    /// Applies defaults and validates the configuration.
    ///
    /// Returns the normalized copy together with the resolved topology. No
    /// connection is made here; `self` is left untouched so a rejected
    /// configuration leaves nothing half-applied behind.
    pub fn normalize(&self, messages: &ErrorMessages) -> Result<(CacheConfig, RedisTopology), TopologyError> {
        let mut config = self.clone();

        if config.mode.is_empty() {
            config.mode = RedisMode::standalone.to_string();
        }
        let mode = RedisMode::from_str(&config.mode).map_err(|_| {
            let allowed = RedisMode::allowed();
            TopologyError::EnumViolation {
                field: Self::FIELD_MODE.to_string(),
                value: config.mode.clone(),
                message: messages.enum_error(Self::FIELD_MODE, &config.mode, &allowed),
                allowed,
            }
        })?;

        if config.servers.is_empty() {
            if config.host.is_empty() {
                config.host = String::from(Self::DEFAULT_HOST);
            }
            if config.port == 0 {
                config.port = Self::DEFAULT_PORT;
            }
            config.servers = vec![ServerAddress::new(&config.host, config.port)];
        } else if !config.host.is_empty() {
            return Err(TopologyError::MutuallyExclusive {
                first: Self::FIELD_HOST.to_string(),
                second: Self::FIELD_SERVERS.to_string(),
                message: messages.params_mutually_exclusive(Self::FIELD_HOST, Self::FIELD_SERVERS),
            });
        }

        if config.ttl == 0 {
            config.ttl = Self::DEFAULT_TTL;
        }

        let topology = RedisTopology::resolve(mode, &config, messages)?;
        Ok((config, topology))
    }
}
