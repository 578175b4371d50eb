use tor_rest_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::connection_info::{connection_with_invalid_credentials, connection_with_no_credentials};
use crate::servers::api::v1::asserts::{assert_not_found, assert_unauthorized};
use crate::servers::api::v1::client::{get, Client};
use crate::servers::api::Started;

#[tokio::test]
async fn should_authenticate_requests_by_using_basic_auth_credentials() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info()).get_tasks().await;

    assert_eq!(response.status(), 200);

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_when_the_credentials_are_missing() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(connection_with_no_credentials(&env.bind_address().to_string()))
        .get_tasks()
        .await;

    assert_unauthorized(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_when_the_credentials_are_wrong() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(connection_with_invalid_credentials(&env.bind_address().to_string()))
        .get_tasks()
        .await;

    assert_unauthorized(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_authenticate_requests_with_custom_credentials() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral_with_credentials("operator", "s3cr3t").into()).await;

    let response = Client::new(env.get_connection_info()).get_tasks().await;

    assert_eq!(response.status(), 200);

    env.stop().await;
}

#[tokio::test]
async fn should_not_require_credentials_for_requests_outside_the_api() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = get(&format!("http://{}/health_check", env.bind_address())).await;

    assert_not_found(response).await;

    env.stop().await;
}
