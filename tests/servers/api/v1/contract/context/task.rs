use serde_json::{json, Value};
use tor_rest_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{
    assert_invalid_input, assert_not_found, assert_task, assert_task_created, assert_task_list, assert_task_removed,
};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

fn task_uri(env: &Started, task_id: u64) -> String {
    format!("http://{}/tor_rest/api/v1.0/tasks/{task_id}", env.bind_address())
}

#[tokio::test]
async fn should_return_an_empty_list_when_there_are_no_tasks() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info()).get_tasks().await;

    assert_task_list(response, vec![]).await;

    env.stop().await;
}

#[tokio::test]
async fn should_assign_id_one_to_the_first_created_task() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    let client = Client::new(env.get_connection_info());

    let response = client
        .add_task(&json!({"task_name": "Ubuntu ISO", "tor_number": "abc123"}))
        .await;

    let task = assert_task_created(response).await;

    assert_eq!(task.uri, task_uri(&env, 1));

    env.stop().await;
}

#[tokio::test]
async fn should_assign_the_last_task_id_plus_one_and_append_the_new_task() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    let client = Client::new(env.get_connection_info());

    let first = assert_task_created(
        client
            .add_task(&json!({"task_name": "first", "tor_number": "t1"}))
            .await,
    )
    .await;
    let second = assert_task_created(
        client
            .add_task(&json!({"task_name": "second", "tor_number": "t2"}))
            .await,
    )
    .await;

    assert_eq!(first.uri, task_uri(&env, 1));
    assert_eq!(second.uri, task_uri(&env, 2));

    let response = client.get_tasks().await;

    assert_task_list(response, vec![first, second]).await;

    env.stop().await;
}

#[tokio::test]
async fn should_apply_the_default_values_when_creating_a_task() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    let client = Client::new(env.get_connection_info());

    let task = assert_task_created(
        client
            .add_task(&json!({"task_name": "Ubuntu ISO", "tor_number": "abc123"}))
            .await,
    )
    .await;

    assert_eq!(task.resource, "rutra");
    assert_eq!(task.dir_dest, "movies");
    assert!(!task.done);

    env.stop().await;
}

#[tokio::test]
async fn should_return_the_tasks_with_a_uri_instead_of_an_id() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    let client = Client::new(env.get_connection_info());

    client
        .add_task(&json!({"task_name": "Ubuntu ISO", "tor_number": "abc123"}))
        .await;

    let body = client.get_tasks().await.json::<Value>().await.unwrap();

    let task = &body["tasks"][0];

    assert!(task.get("id").is_none());
    assert!(task["uri"].as_str().unwrap().ends_with("/tasks/1"));

    env.stop().await;
}

#[tokio::test]
async fn should_allow_getting_a_task() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    let client = Client::new(env.get_connection_info());

    let created = assert_task_created(
        client
            .add_task(&json!({"task_name": "Ubuntu ISO", "tor_number": "abc123"}))
            .await,
    )
    .await;

    let response = client.get_task("1").await;

    assert_task(response, created).await;

    env.stop().await;
}

#[tokio::test]
async fn should_return_a_not_found_response_when_the_task_does_not_exist() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    let client = Client::new(env.get_connection_info());

    assert_not_found(client.get_task("99").await).await;
    assert_not_found(client.update_task("99", &json!({"done": true})).await).await;
    assert_not_found(client.delete_task("99").await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_return_a_not_found_response_when_the_task_id_is_not_a_number() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    let client = Client::new(env.get_connection_info());

    assert_not_found(client.get_task("not-a-number").await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_reject_creating_a_task_with_a_malformed_body() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    let client = Client::new(env.get_connection_info());

    // Malformed JSON
    assert_invalid_input(client.post_raw_body("tasks", "not json {").await).await;

    // Missing required fields
    assert_invalid_input(client.add_task(&json!({"tor_number": "abc123"})).await).await;
    assert_invalid_input(client.add_task(&json!({"task_name": "Ubuntu ISO"})).await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_updating_a_single_field_of_a_task() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    let client = Client::new(env.get_connection_info());

    let created = assert_task_created(
        client
            .add_task(&json!({"task_name": "Ubuntu ISO", "tor_number": "abc123"}))
            .await,
    )
    .await;

    let response = client.update_task("1", &json!({"dir_dest": "tv"})).await;

    assert_eq!(response.status(), 200);

    let updated = response
        .json::<tor_rest::servers::apis::v1::context::task::responses::TaskResponse>()
        .await
        .unwrap()
        .task;

    assert_eq!(updated.dir_dest, "tv");
    assert_eq!(updated.task_name, created.task_name);
    assert_eq!(updated.resource, created.resource);
    assert_eq!(updated.tor_number, created.tor_number);
    assert_eq!(updated.done, created.done);

    env.stop().await;
}

#[tokio::test]
async fn should_reject_updating_a_task_when_done_is_not_a_boolean() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    let client = Client::new(env.get_connection_info());

    let created = assert_task_created(
        client
            .add_task(&json!({"task_name": "Ubuntu ISO", "tor_number": "abc123"}))
            .await,
    )
    .await;

    let response = client.update_task("1", &json!({"done": "true"})).await;

    assert_invalid_input(response).await;

    // The stored task must be unchanged
    let response = client.get_task("1").await;

    assert_task(response, created).await;

    env.stop().await;
}

#[tokio::test]
async fn should_return_not_found_when_updating_an_unknown_task_with_an_invalid_body() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    let client = Client::new(env.get_connection_info());

    client
        .add_task(&json!({"task_name": "Ubuntu ISO", "tor_number": "abc123"}))
        .await;

    // The unknown id wins over the invalid body
    let response = client.update_task("99", &json!({"done": "true"})).await;

    assert_not_found(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_remove_exactly_one_task_when_deleting() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    let client = Client::new(env.get_connection_info());

    client
        .add_task(&json!({"task_name": "first", "tor_number": "t1"}))
        .await;
    let second = assert_task_created(
        client
            .add_task(&json!({"task_name": "second", "tor_number": "t2"}))
            .await,
    )
    .await;

    assert_task_removed(client.delete_task("1").await).await;

    assert_not_found(client.get_task("1").await).await;

    let response = client.get_tasks().await;

    assert_task_list(response, vec![second]).await;

    env.stop().await;
}

#[tokio::test]
async fn should_assign_id_one_again_after_removing_the_only_task() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    let client = Client::new(env.get_connection_info());

    assert_task_created(
        client
            .add_task(&json!({"task_name": "only", "tor_number": "t1"}))
            .await,
    )
    .await;

    assert_task_removed(client.delete_task("1").await).await;

    let task = assert_task_created(
        client
            .add_task(&json!({"task_name": "new", "tor_number": "t2"}))
            .await,
    )
    .await;

    assert_eq!(task.uri, task_uri(&env, 1));

    env.stop().await;
}

#[tokio::test]
async fn should_keep_the_tasks_across_a_service_restart() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let configuration = std::sync::Arc::new(configuration::ephemeral());

    let env = Started::new(&configuration).await;
    let client = Client::new(env.get_connection_info());

    let created = assert_task_created(
        client
            .add_task(&json!({"task_name": "Ubuntu ISO", "tor_number": "abc123"}))
            .await,
    )
    .await;

    env.stop().await;

    // A fresh instance backed by the same database file
    let env = Started::new(&configuration).await;
    let client = Client::new(env.get_connection_info());

    let response = client.get_task("1").await;

    assert_eq!(response.status(), 200);

    let reloaded = response
        .json::<tor_rest::servers::apis::v1::context::task::responses::TaskResponse>()
        .await
        .unwrap()
        .task;

    assert_eq!(reloaded.task_name, created.task_name);
    assert_eq!(reloaded.tor_number, created.tor_number);

    env.stop().await;
}
