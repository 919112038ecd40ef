//! Error types for the edge API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use draftpad_store::StoreError;

/// Errors that can occur while handling an API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request was missing required fields or carried an invalid body.
    #[error("{0}")]
    BadRequest(String),

    /// The completion API call failed.
    #[error("{0}")]
    Upstream(String),

    /// The file store backend failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            Self::Store(e) => {
                tracing::error!(error = %e, "file store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage backend failure".to_owned(),
                )
            }
        };

        let body = serde_json::json!({
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
