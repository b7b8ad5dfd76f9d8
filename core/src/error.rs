//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` and `BadRequest` get dedicated variants because they are the
//! two statuses the server uses on purpose. Every other non-2xx response
//! lands in `HttpError` with the raw status code and body for debugging.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods and `TodoService`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested item does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 400, e.g. the body id did not match the path id.
    #[error("bad request")]
    BadRequest,

    /// Any other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),
}
