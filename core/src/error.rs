//! Error types for the catalog API client.
//!
//! # Design
//! Transport failures (DNS, refused connection, timeout) never appear here:
//! the host owns the round-trip and its error type propagates unchanged.
//! `ApiError` covers only what the parsing layer itself can detect — a
//! non-success status on the validated path, a body that fails schema
//! validation, and a body that cannot be decoded at all. Nothing is retried
//! or swallowed; every failure surfaces to the immediate caller.

use thiserror::Error;

/// Errors returned by `CatalogClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a non-2xx status on the validated fetch path.
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    /// The response body parsed as JSON but violated the expected shape.
    /// The message aggregates every violated constraint.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// The response body could not be decoded into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}
