use std::fmt;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use crate::cache::structs::redis_credentials::RedisCredentials;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::server_address::ServerAddress;

impl fmt::Debug for RedisCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisCredentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl From<&CacheConfig> for RedisCredentials {
    fn from(config: &CacheConfig) -> Self {
        RedisCredentials {
            username: config.username.clone().filter(|username| !username.is_empty()),
            password: config.password.clone().filter(|password| !password.is_empty()),
        }
    }
}

impl RedisCredentials {
    /// Builds a `redis://` URL for `server`, selecting `database` when given.
    pub fn connection_url(&self, server: &ServerAddress, database: Option<i64>) -> String {
        let mut url = String::from("redis://");
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => {
                url.push_str(&format!("{}:{}@", encode(username), encode(password)));
            }
            (Some(username), None) => url.push_str(&format!("{}@", encode(username))),
            (None, Some(password)) => url.push_str(&format!(":{}@", encode(password))),
            (None, None) => {}
        }
        if server.host.contains(':') {
            url.push_str(&format!("[{}]:{}", server.host, server.port));
        } else {
            url.push_str(&format!("{}:{}", server.host, server.port));
        }
        if let Some(database) = database
            && database != 0 {
                url.push_str(&format!("/{}", database));
            }
        url
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}
