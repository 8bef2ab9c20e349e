//! Client configuration

/// Configuration for connecting to the reservation server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5001")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::new("http://localhost:5001");
        assert_eq!(config.timeout, 30);
        assert_eq!(config.base_url, "http://localhost:5001");

        let config = config.with_timeout(5);
        assert_eq!(config.timeout, 5);
    }
}
