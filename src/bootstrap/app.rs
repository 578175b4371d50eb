//! Initialization of the configuration and the domain layer.
use std::sync::Arc;

use tor_rest_configuration::{Configuration, Info};

use crate::bootstrap;
use crate::core::services::task_store_factory;
use crate::core::TaskStore;

/// The default configuration file location.
const DEFAULT_CONFIG_TOML_PATH: &str = "./tor-rest.toml";

/// It loads the configuration and builds the task store.
///
/// # Panics
///
/// Will panic if the configuration cannot be loaded. The process must abort
/// at startup when the configuration is unreadable.
#[must_use]
pub fn setup() -> (Arc<Configuration>, Arc<TaskStore>) {
    let configuration = Arc::new(initialize_configuration());
    let task_store = initialize_with_configuration(&configuration);

    (configuration, task_store)
}

/// It initializes the logging and builds the task store from an already
/// loaded configuration.
///
/// # Panics
///
/// Will panic if the task store dependencies (database driver, audit log)
/// cannot be instantiated.
#[must_use]
pub fn initialize_with_configuration(configuration: &Arc<Configuration>) -> Arc<TaskStore> {
    initialize_logging(configuration);
    Arc::new(task_store_factory(configuration))
}

fn initialize_configuration() -> Configuration {
    let info = Info::new(DEFAULT_CONFIG_TOML_PATH.to_string()).expect("it should be able to build the config info");

    Configuration::load(&info).expect("no valid configuration found, aborting")
}

fn initialize_logging(configuration: &Arc<Configuration>) {
    bootstrap::logging::setup(configuration);
}
