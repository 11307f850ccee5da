//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` and `BadRequest` get dedicated variants because those are the
//! statuses a caller reacts to (drop a stale row, show a validation message).
//! Every other non-success response lands in `HttpError` with the raw status
//! code and body for debugging.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested todo does not exist.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// The server returned 400: the request was rejected as invalid.
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// The server returned another unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
