//! Typed HTTP client for the reservation server
//!
//! A thin wrapper over `reqwest` that speaks the server's `{data}` /
//! `{status, message}` envelopes. The base URL and timeout come in
//! through [`ClientConfig`] instead of module-level state.
//!
//! ```ignore
//! let config = ClientConfig::new("http://localhost:5001");
//! let client = HttpClient::new(&config)?;
//! let today = client.list_reservations(Some("2030-01-04"), None).await?;
//! ```

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
