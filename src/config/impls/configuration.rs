use std::fs::File;
use std::io::Write;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::error_messages::ErrorMessages;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: Self::default_log_level(),
            error_messages: ErrorMessages::default(),
            cache: CacheConfig::init(),
        }
    }

    pub(crate) fn default_log_level() -> String {
        String::from("info")
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError),
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    /// Loads `path`, optionally writing a default configuration there when the
    /// file is missing or unreadable.
    ///
    /// A freshly written default is still returned as an error so the operator
    /// gets a chance to edit it before anything connects.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        match Self::load_file(path) {
            Ok(config) => Ok(config),
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);
                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(error);
                }
                eprintln!("Creating config file..");
                let config_toml = toml::to_string(&Configuration::init()).map_err(ConfigurationError::SerializeError)?;
                match Self::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(error)
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path);
                        Err(e)
                    }
                }
            }
        }
    }
}
