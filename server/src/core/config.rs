/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 5001 | HTTP API port |
/// | DATABASE_PATH | reservations.db | SQLite database file |
/// | CLOCK_OFFSET_HOURS | 5 | Hours subtracted from UTC for the past-reservation check |
/// | ENVIRONMENT | development | development \| staging \| production |
///
/// The clock offset approximates the restaurant's local timezone; it is
/// configuration rather than a constant baked into the validation code.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Path to the SQLite database file
    pub database_path: String,
    /// Hours subtracted from UTC when deciding whether a reservation is in the past
    pub clock_offset_hours: i64,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5001),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "reservations.db".into()),
            clock_offset_hours: std::env::var("CLOCK_OFFSET_HOURS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the database path and port, commonly for tests
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
