//! The first and only version of the task store API.
//!
//! The API contexts are:
//!
//! - [`task`](crate::servers::apis::v1::context::task): task CRUD.
pub mod context;
pub mod middlewares;
pub mod responses;
pub mod routes;
