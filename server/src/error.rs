//! HTTP error responses for the todo API.
//!
//! # Design
//! Each variant carries the exact status and body the route contract
//! promises. Get and update report a miss as `{"message": "Todo not found"}`
//! while delete reports `{"error": "Not found"}`; the two 404 shapes are
//! separate variants so neither route can drift to the other's body. The
//! 500 path is the only generic, non-diagnostic response.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Error responses produced by the request handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// 400 — the create payload had a missing or empty `task`.
    TaskRequired,

    /// 404 — the get/update target does not exist.
    TodoNotFound,

    /// 404 — the delete target does not exist. The delete route reports
    /// misses under an `error` key rather than `message`.
    DeleteNotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::TaskRequired => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Task is required" }),
            ),
            ApiError::TodoNotFound => (
                StatusCode::NOT_FOUND,
                json!({ "message": "Todo not found" }),
            ),
            ApiError::DeleteNotFound => (StatusCode::NOT_FOUND, json!({ "error": "Not found" })),
        };
        (status, Json(body)).into_response()
    }
}

/// Response for a panic caught during dispatch: 500 with a generic body.
/// The request is never retried and the process keeps serving.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    };
    tracing::error!("request handler panicked: {detail}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Server error!" })),
    )
        .into_response()
}
