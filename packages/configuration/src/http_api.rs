//! Configuration for the task store REST API.
use serde::{Deserialize, Serialize};

/// Configuration for the REST API server.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct HttpApi {
    /// The address the API will bind to, for example `127.0.0.1:1212`. Use
    /// port `0` to bind to a random port.
    #[serde(default = "HttpApi::default_bind_address")]
    pub bind_address: String,

    /// The username required by every API request (HTTP basic auth).
    #[serde(default = "HttpApi::default_username")]
    pub username: String,

    /// The password required by every API request (HTTP basic auth).
    #[serde(default = "HttpApi::default_password")]
    pub password: String,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self {
            bind_address: Self::default_bind_address(),
            username: Self::default_username(),
            password: Self::default_password(),
        }
    }
}

impl HttpApi {
    fn default_bind_address() -> String {
        "127.0.0.1:1212".to_string()
    }

    fn default_username() -> String {
        "admin".to_string()
    }

    fn default_password() -> String {
        "MySecretPassword".to_string()
    }
}
