//! API routes.
//!
//! It loads the routes for all the API versions and adds the authentication
//! middleware to them.
//!
//! All the API routes have the fixed
//! [`API_BASE_PATH`](crate::servers::apis::API_BASE_PATH) prefix, for
//! example: `/tor_rest/api/v1.0/tasks`.
use std::sync::Arc;

use axum::response::Response;
use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use super::v1;
use super::v1::middlewares::auth::Credentials;
use super::API_BASE_PATH;
use crate::core::TaskStore;

/// It builds the router for the whole API.
///
/// The authentication middleware is layered over the API routes only: the
/// unknown-route fallback stays reachable without credentials.
pub fn router(task_store: Arc<TaskStore>, credentials: Arc<Credentials>) -> Router {
    let router = Router::new();

    let router = v1::routes::add(API_BASE_PATH, router, task_store);

    router
        .layer(middleware::from_fn_with_state(credentials, v1::middlewares::auth::auth))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
}

/// Handler for unknown routes. It does not require authentication.
async fn not_found_handler() -> Response {
    v1::responses::not_found_response()
}
