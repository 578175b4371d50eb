//! Common responses for the v1.0 API shared by all the contexts.
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// The error body shape shared by all the API error responses.
#[derive(Serialize, Debug)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// `404` error response, returned for unknown task ids and unknown routes.
///
/// # Panics
///
/// Will panic if it can't convert the error body to json.
#[must_use]
pub fn not_found_response() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

/// `401` error response, returned when credentials are missing or wrong.
///
/// # Panics
///
/// Will panic if it can't convert the error body to json.
#[must_use]
pub fn unauthorized_response() -> Response {
    error_response(StatusCode::UNAUTHORIZED, "Unauthorized access")
}

/// `400` error response, returned for malformed JSON bodies, bodies missing
/// a required field, and a `done` field that is not a boolean. They are all
/// one invalid-input kind.
///
/// # Panics
///
/// Will panic if it can't convert the error body to json.
#[must_use]
pub fn invalid_input_response() -> Response {
    error_response(StatusCode::BAD_REQUEST, "Invalid input")
}

/// `500` error response for failures the caller cannot fix, for example a
/// persistence write that failed.
#[must_use]
pub fn unhandled_rejection_response(reason: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!("Unhandled rejection: {reason}"),
    )
        .into_response()
}

fn error_response(status_code: StatusCode, error: &str) -> Response {
    (
        status_code,
        [(header::CONTENT_TYPE, "application/json")],
        serde_json::to_string(&ErrorBody { error }).unwrap(),
    )
        .into_response()
}
