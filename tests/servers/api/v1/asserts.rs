use reqwest::Response;
use tor_rest::servers::apis::v1::context::task::resources::TaskResource;
use tor_rest::servers::apis::v1::context::task::responses::{TaskListResponse, TaskResponse};

// Resource responses

pub async fn assert_task_list(response: Response, tasks: Vec<TaskResource>) {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    assert_eq!(response.json::<TaskListResponse>().await.unwrap().tasks, tasks);
}

pub async fn assert_task(response: Response, task: TaskResource) {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    assert_eq!(response.json::<TaskResponse>().await.unwrap().task, task);
}

pub async fn assert_task_created(response: Response) -> TaskResource {
    assert_eq!(response.status(), 201);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    response.json::<TaskResponse>().await.unwrap().task
}

pub async fn assert_task_removed(response: Response) {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    assert_eq!(response.text().await.unwrap(), "{\"result\":true}");
}

// Error responses

pub async fn assert_not_found(response: Response) {
    assert_eq!(response.status(), 404);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    assert_eq!(response.text().await.unwrap(), "{\"error\":\"Not found\"}");
}

pub async fn assert_invalid_input(response: Response) {
    assert_eq!(response.status(), 400);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    assert_eq!(response.text().await.unwrap(), "{\"error\":\"Invalid input\"}");
}

pub async fn assert_unauthorized(response: Response) {
    assert_eq!(response.status(), 401);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    assert_eq!(response.text().await.unwrap(), "{\"error\":\"Unauthorized access\"}");
}
