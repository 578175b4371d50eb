//! Ephemeral configurations for testing.
//!
//! Each configuration binds the API to a random free port and uses its own
//! temporary database file and audit log directory, so tests can run in
//! parallel without interfering with each other.
use std::env;

use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use tor_rest_configuration::{Configuration, Threshold};

/// It builds a configuration for a service instance that only lives for the
/// duration of a test.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off;

    // Port 0 means the OS will choose a random free port.
    config.http_api.bind_address = "127.0.0.1:0".to_string();

    let run_id = random_run_id();

    let temp_dir = env::temp_dir().join(format!("tor-rest-test-{run_id}"));
    std::fs::create_dir_all(&temp_dir).expect("it should create the temp dir for the test run");

    config.database.db_file = temp_dir
        .join("tasks.json")
        .to_str()
        .expect("temp db path should be valid UTF-8")
        .to_owned();

    config.auditing.log_dir = temp_dir
        .to_str()
        .expect("temp log dir path should be valid UTF-8")
        .to_owned();

    config
}

/// Like [`ephemeral`] but with explicit API credentials.
#[must_use]
pub fn ephemeral_with_credentials(username: &str, password: &str) -> Configuration {
    let mut config = ephemeral();

    config.http_api.username = username.to_string();
    config.http_api.password = password.to_string();

    config
}

fn random_run_id() -> String {
    thread_rng().sample_iter(&Alphanumeric).take(16).map(char::from).collect()
}
