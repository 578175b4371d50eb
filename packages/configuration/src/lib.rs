//! Configuration data structures for the tor-rest task store service.
//!
//! The configuration is loaded from a TOML file merged with environment
//! variables. The default configuration file location is `./tor-rest.toml`.
//!
//! The whole TOML document can be injected with the `TOR_REST_CONFIG_TOML`
//! environment variable (it has priority over the file), and the file
//! location can be changed with `TOR_REST_CONFIG_TOML_PATH`.
//!
//! Individual values can be overridden with `TOR_REST_`-prefixed variables
//! using `__` as the section separator, for example:
//!
//! ```text
//! TOR_REST_HTTP_API__PASSWORD=NewPassword
//! ```
//!
//! The default configuration is:
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [http_api]
//! bind_address = "127.0.0.1:1212"
//! username = "admin"
//! password = "MySecretPassword"
//!
//! [database]
//! db_file = "./storage/tor-rest/tasks.json"
//!
//! [auditing]
//! log_dir = "./storage/tor-rest"
//! ```
pub mod auditing;
pub mod database;
pub mod http_api;
pub mod logging;

use std::env;
use std::fs;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use crate::auditing::Auditing;
pub use crate::database::Database;
pub use crate::http_api::HttpApi;
pub use crate::logging::{Logging, Threshold};

// Environment variables

/// The whole `tor-rest.toml` file content. It has priority over the config
/// file, even if the file is not on the default path.
const ENV_VAR_CONFIG_TOML: &str = "TOR_REST_CONFIG_TOML";

/// The `tor-rest.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "TOR_REST_CONFIG_TOML_PATH";

/// Prefix for single-value overrides, e.g. `TOR_REST_HTTP_API__USERNAME`.
const ENV_VAR_PREFIX: &str = "TOR_REST_";

/// Information required for loading the configuration.
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Builds the configuration info from the environment.
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to obtain a configuration source.
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(default_config_toml_path: String) -> Result<Self, Error> {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            println!("Loading configuration from environment variable:\n {config_toml}");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            println!("Loading configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            println!("Loading configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        Ok(Self {
            config_toml,
            config_toml_path,
        })
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Unable to load or parse the configuration sources.
    #[error("Failed processing the configuration: {source}")]
    ConfigError { source: figment::Error },

    /// Unable to write the configuration to a file.
    #[error("Failed to write the configuration to {path}: {source}")]
    UnableToWriteToFile { source: std::io::Error, path: String },
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigError { source: err }
    }
}

/// The whole configuration for the task store service.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Configuration {
    /// Logging configuration.
    #[serde(default)]
    pub logging: Logging,

    /// The REST API configuration.
    #[serde(default)]
    pub http_api: HttpApi,

    /// The task database configuration.
    #[serde(default)]
    pub database: Database,

    /// The audit log configuration.
    #[serde(default)]
    pub auditing: Auditing,
}

impl Configuration {
    /// Loads the configuration from the [`Info`] struct.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the sources cannot be read or have a bad
    /// configuration.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = if let Some(config_toml) = &info.config_toml {
            Figment::new()
                .merge(Toml::string(config_toml))
                .merge(Env::prefixed(ENV_VAR_PREFIX).split("__"))
        } else {
            Figment::new()
                .merge(Toml::file(&info.config_toml_path))
                .merge(Env::prefixed(ENV_VAR_PREFIX).split("__"))
        };

        let config: Configuration = figment.extract()?;

        Ok(config)
    }

    /// Saves the configuration to the configuration file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file cannot be written.
    pub fn save_to_file(&self, path: &str) -> Result<(), Error> {
        fs::write(path, self.to_toml()).map_err(|source| Error::UnableToWriteToFile {
            source,
            path: path.to_owned(),
        })
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration cannot be encoded to TOML.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string(self).expect("Could not encode TOML value")
    }
}
