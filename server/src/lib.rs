//! Reservation Server - restaurant table and reservation management
//!
//! # Module structure
//!
//! ```text
//! server/src/
//! ├── core/          # Config, state, HTTP server
//! ├── api/           # Routes, handlers, validation pipeline
//! ├── db/            # SQLite pool and repositories
//! └── utils/         # Errors, logging, business clock
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};
pub use utils::logger::init_logger;
