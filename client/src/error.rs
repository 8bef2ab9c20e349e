//! Client error types

use thiserror::Error;

/// Errors surfaced by [`crate::HttpClient`]
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server rejected the request (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The target resource does not exist (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// A 5xx response from the server
    #[error("Server error: {0}")]
    Server(String),

    /// Connection, timeout, or protocol failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not the expected envelope
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;
