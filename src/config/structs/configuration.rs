use serde::{Deserialize, Serialize};
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::error_messages::ErrorMessages;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    #[serde(default = "Configuration::default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub error_messages: ErrorMessages,
    #[serde(default)]
    pub cache: CacheConfig,
}
