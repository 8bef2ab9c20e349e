//! Utility module - errors, logging, and the business clock

pub mod error;
pub mod logger;
pub mod time;

pub use error::{AppError, AppResult};
pub use time::BusinessClock;
