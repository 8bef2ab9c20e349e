//! Response envelopes
//!
//! Success bodies are `{"data": ...}`, failures are
//! `{"status": <code>, "message": "..."}`.

use serde::{Deserialize, Serialize};

/// The `{"data": ...}` success wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// The error envelope surfaced to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}
