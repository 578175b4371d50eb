pub fn connection_with_invalid_credentials(bind_address: &str) -> ConnectionInfo {
    ConnectionInfo::authenticated(bind_address, "admin", "WrongPassword")
}

pub fn connection_with_no_credentials(bind_address: &str) -> ConnectionInfo {
    ConnectionInfo::anonymous(bind_address)
}

#[derive(Clone)]
pub struct ConnectionInfo {
    pub bind_address: String,
    pub credentials: Option<Credentials>,
}

#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl ConnectionInfo {
    pub fn authenticated(bind_address: &str, username: &str, password: &str) -> Self {
        Self {
            bind_address: bind_address.to_string(),
            credentials: Some(Credentials {
                username: username.to_string(),
                password: password.to_string(),
            }),
        }
    }

    pub fn anonymous(bind_address: &str) -> Self {
        Self {
            bind_address: bind_address.to_string(),
            credentials: None,
        }
    }
}
