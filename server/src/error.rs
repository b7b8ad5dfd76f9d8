//! Error types for the todo store.
//!
//! # Design
//! `StoreError` is what the `Db` layer returns. `AppError` is what handlers
//! return; it maps onto the two client-visible statuses (404, 400) plus a
//! catch-all 500 for storage failures. Every error response has an empty
//! body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures raised by the SQLite-backed store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row with the requested id.
    #[error("todo item not found")]
    NotFound,

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The blocking task running the statement panicked or was cancelled.
    #[error("storage task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("database connection mutex poisoned")]
    Poisoned,
}

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,

    /// Body id does not match the path id on update.
    #[error("bad request")]
    BadRequest,

    #[error("internal error: {0}")]
    Internal(StoreError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound,
            other => AppError::Internal(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::BadRequest => StatusCode::BAD_REQUEST.into_response(),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
