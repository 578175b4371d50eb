use std::net::SocketAddr;
use std::sync::Arc;

use tor_rest::bootstrap::app::initialize_with_configuration;
use tor_rest::core::TaskStore;
use tor_rest::servers::apis::server::{ApiServer, Launcher, Running, Stopped};
use tor_rest::servers::apis::v1::middlewares::auth::Credentials;
use tor_rest_configuration::{Configuration, HttpApi};

use super::connection_info::ConnectionInfo;

pub struct Environment<S> {
    pub config: Arc<HttpApi>,
    pub task_store: Arc<TaskStore>,
    pub server: ApiServer<S>,
}

impl Environment<Stopped> {
    pub fn new(configuration: &Arc<Configuration>) -> Self {
        let task_store = initialize_with_configuration(configuration);

        let config = Arc::new(configuration.http_api.clone());

        let bind_to = config
            .bind_address
            .parse::<SocketAddr>()
            .expect("it should have a valid api bind address");

        let server = ApiServer::new(Launcher::new(bind_to));

        Self {
            config,
            task_store,
            server,
        }
    }

    pub async fn start(self) -> Environment<Running> {
        self.task_store
            .load_tasks_from_database()
            .await
            .expect("it should be able to load the persisted tasks");

        let credentials = Arc::new(Credentials::new(self.config.username.clone(), self.config.password.clone()));

        Environment {
            config: self.config,
            task_store: self.task_store.clone(),
            server: self.server.start(self.task_store, credentials).await.unwrap(),
        }
    }
}

impl Environment<Running> {
    pub async fn new(configuration: &Arc<Configuration>) -> Self {
        Environment::<Stopped>::new(configuration).start().await
    }

    pub async fn stop(self) -> Environment<Stopped> {
        Environment {
            config: self.config,
            task_store: self.task_store,
            server: self.server.stop().await.unwrap(),
        }
    }

    pub fn get_connection_info(&self) -> ConnectionInfo {
        ConnectionInfo::authenticated(
            &self.server.state.binding.to_string(),
            &self.config.username,
            &self.config.password,
        )
    }

    pub fn bind_address(&self) -> SocketAddr {
        self.server.state.binding
    }
}
