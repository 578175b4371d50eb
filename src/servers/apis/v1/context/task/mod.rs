//! Task context for the v1.0 API.
//!
//! Tasks are torrent-download job records. The context exposes plain CRUD
//! over the collection. All routes require
//! [authentication](crate::servers::apis::v1::middlewares::auth), the samples
//! below omit the `Authorization` header.
//!
//! Tasks are always returned in their public representation: the internal
//! `id` field is replaced by a `uri` field with the absolute URL of the task,
//! every other field passes through unchanged. See
//! [`TaskResource`](crate::servers::apis::v1::context::task::resources::TaskResource).
//!
//! # List all tasks
//!
//! `GET /tor_rest/api/v1.0/tasks`
//!
//! Returns all the tasks in storage order.
//!
//! **Sample response**
//!
//! ```json
//! {
//!   "tasks": [
//!     {
//!       "uri": "http://127.0.0.1:1212/tor_rest/api/v1.0/tasks/1",
//!       "task_name": "Ubuntu ISO",
//!       "resource": "rutra",
//!       "tor_number": "abc123",
//!       "dir_dest": "movies",
//!       "done": false
//!     }
//!   ]
//! }
//! ```
//!
//! # Get a task
//!
//! `GET /tor_rest/api/v1.0/tasks/{id}`
//!
//! Returns one task. Unknown ids and non-numeric ids get a `404` response.
//!
//! **Sample response**
//!
//! ```json
//! {
//!   "task": {
//!     "uri": "http://127.0.0.1:1212/tor_rest/api/v1.0/tasks/1",
//!     "task_name": "Ubuntu ISO",
//!     "resource": "rutra",
//!     "tor_number": "abc123",
//!     "dir_dest": "movies",
//!     "done": false
//!   }
//! }
//! ```
//!
//! # Create a task
//!
//! `POST /tor_rest/api/v1.0/tasks`
//!
//! Creates a new task at the end of the collection. The new task id is the id
//! of the last task plus one, or `1` when the collection is empty.
//!
//! **Request body**
//!
//! Field | Required | Default
//! ---|---|---
//! `task_name`  | yes |
//! `tor_number` | yes |
//! `resource`   | no  | `rutra`
//! `dir_dest`   | no  | `movies`
//!
//! `done` always starts as `false`. A malformed JSON body or a missing
//! required field gets a `400` response.
//!
//! **Sample request**
//!
//! ```json
//! {
//!   "task_name": "Ubuntu ISO",
//!   "tor_number": "abc123"
//! }
//! ```
//!
//! Returns the created task with status `201`.
//!
//! # Update a task
//!
//! `PUT /tor_rest/api/v1.0/tasks/{id}`
//!
//! Merge update: only the fields present in the body are overwritten, absent
//! fields are untouched. All fields are optional. A `done` value that is not
//! a boolean (for example the string `"true"`) gets a `400` response and
//! leaves the task unchanged.
//!
//! **Sample request**
//!
//! ```json
//! {
//!   "dir_dest": "tv"
//! }
//! ```
//!
//! Returns the updated task.
//!
//! # Delete a task
//!
//! `DELETE /tor_rest/api/v1.0/tasks/{id}`
//!
//! Removes the task. Unknown ids get a `404` response.
//!
//! **Sample response**
//!
//! ```json
//! {
//!   "result": true
//! }
//! ```
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
