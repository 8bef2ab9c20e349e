//! Request envelope
//!
//! Every mutating endpoint takes its payload wrapped in `{"data": ...}`.

use serde::{Deserialize, Serialize};

/// The `{"data": ...}` request wrapper
///
/// `data` stays optional so a missing wrapper is rejected by the
/// validation pipeline with its own message rather than a generic
/// deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestData<T> {
    pub data: Option<T>,
}

impl<T> RequestData<T> {
    pub fn new(data: T) -> Self {
        Self { data: Some(data) }
    }
}
