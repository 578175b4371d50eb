//! Documentation for [tor-rest](https://github.com/tor-rest/tor-rest) API.
//!
//! tor-rest is a REST API for managing *tasks*: metadata records for
//! torrent-download jobs. It never triggers or monitors any download, it only
//! records task metadata.
//!
//! The API exposes a single resource under the `/tor_rest/api/v1.0` prefix:
//!
//! Method   | Path            | Description
//! ---|---|---
//! `GET`    | `/tasks`        | List all tasks
//! `GET`    | `/tasks/{id}`   | Get a single task
//! `POST`   | `/tasks`        | Create a task
//! `PUT`    | `/tasks/{id}`   | Partially update a task
//! `DELETE` | `/tasks/{id}`   | Delete a task
//!
//! Every route requires HTTP basic authentication with the single
//! username/password pair from the configuration. Refer to the
//! [`servers::apis`] module documentation for the full endpoint reference.
//!
//! # Getting started
//!
//! The configuration is a TOML file, by default `./tor-rest.toml`:
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [http_api]
//! bind_address = "127.0.0.1:1212"
//! username = "admin"
//! password = "MySecretPassword"
//!
//! [database]
//! db_file = "./storage/tor-rest/tasks.json"
//!
//! [auditing]
//! log_dir = "./storage/tor-rest"
//! ```
//!
//! Run the service with:
//!
//! ```text
//! cargo run
//! ```
//!
//! And create the first task:
//!
//! ```text
//! curl -u admin:MySecretPassword \
//!   -H "Content-Type: application/json" \
//!   -d '{"task_name": "Ubuntu ISO", "tor_number": "abc123"}' \
//!   http://127.0.0.1:1212/tor_rest/api/v1.0/tasks
//! ```
//!
//! # Components
//!
//! - [`core`]: the task store, the domain layer. It owns the in-memory task
//!   collection, the persistence driver and the audit log.
//! - [`servers`]: the REST API server (axum).
//! - [`bootstrap`]: configuration loading, logging setup and job starters.
//! - [`app`]: the application entry point gluing the above together.
//!
//! # Persistence
//!
//! The whole task collection is loaded once at startup from a JSON file and
//! every mutation rewrites the entire collection to that file (snapshot
//! persistence). There is no write-ahead log and no temp-file-rename step: a
//! crash between the in-memory mutation and the file write loses the update,
//! and a crash mid-write can corrupt the file.
//!
//! # Audit log
//!
//! Besides the operational logging (`tracing`), every significant operation
//! appends one timestamped line to `<log_dir>/log.log`, for example:
//!
//! ```text
//! 2024-03-01 10:15:42 Task 7 was added
//! ```
pub mod app;
pub mod bootstrap;
pub mod core;
pub mod servers;
