//! Repository Module
//!
//! CRUD operations over the SQLite pool. Repositories are free functions
//! taking `&SqlitePool`; they report `RepoError` and leave HTTP concerns
//! to the handlers.

pub mod reservation;
pub mod table;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

#[cfg(test)]
pub(crate) mod test_support {
    use sqlx::SqlitePool;
    use sqlx::sqlite::SqlitePoolOptions;

    /// In-memory SQLite pool with the real migrations applied.
    ///
    /// A single connection keeps every query on the same in-memory
    /// database.
    pub(crate) async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }
}
