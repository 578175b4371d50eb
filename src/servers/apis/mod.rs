//! The task store REST API.
//!
//! The API is the only outer surface of the service. It exposes the task
//! collection under the fixed `/tor_rest/api/v1.0` prefix:
//!
//! Method   | Path            | Description
//! ---|---|---
//! `GET`    | `/tasks`        | [List all tasks](crate::servers::apis::v1::context::task#list-all-tasks)
//! `GET`    | `/tasks/{id}`   | [Get a task](crate::servers::apis::v1::context::task#get-a-task)
//! `POST`   | `/tasks`        | [Create a task](crate::servers::apis::v1::context::task#create-a-task)
//! `PUT`    | `/tasks/{id}`   | [Update a task](crate::servers::apis::v1::context::task#update-a-task)
//! `DELETE` | `/tasks/{id}`   | [Delete a task](crate::servers::apis::v1::context::task#delete-a-task)
//!
//! # Authentication
//!
//! Every route requires HTTP basic authentication with the single
//! username/password pair from the
//! [HTTP API configuration](tor_rest_configuration::HttpApi):
//!
//! ```toml
//! [http_api]
//! bind_address = "127.0.0.1:1212"
//! username = "admin"
//! password = "MySecretPassword"
//! ```
//!
//! Requests with missing or wrong credentials get a `401` response:
//!
//! ```json
//! {
//!   "error": "Unauthorized access"
//! }
//! ```
//!
//! The only exception is the unknown-route handler: requests for paths
//! outside the API get a `404` response without needing credentials:
//!
//! ```json
//! {
//!   "error": "Not found"
//! }
//! ```
//!
//! # Errors
//!
//! Status | Body | Meaning
//! ---|---|---
//! `400` | `{"error": "Invalid input"}` | Malformed JSON body, missing required field, or `done` not a boolean
//! `401` | `{"error": "Unauthorized access"}` | Missing or wrong credentials
//! `404` | `{"error": "Not found"}` | Unknown task id or unknown route
//! `500` | plain text | Persistence or audit log I/O failure
pub mod routes;
pub mod server;
pub mod v1;

use serde::Deserialize;

/// The fixed path prefix of all the API routes.
pub const API_BASE_PATH: &str = "/tor_rest/api/v1.0";

/// A container for the `task_id` path parameter.
///
/// It does not perform any validation, it just stores the value. Handlers
/// parse it and treat non-numeric values as unknown routes (`404`), the same
/// way a typed route segment would not have matched.
#[derive(Deserialize)]
pub struct TaskIdParam(pub String);
