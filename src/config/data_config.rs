//! Server binding configuration
//!
//! Host, port and worker settings for the HTTP server.

use std::env;

/// Server binding settings
pub struct ServerConfig;

impl ServerConfig {
    /// Returns the host address the server binds to.
    ///
    /// # Default
    ///
    /// `127.0.0.1`
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// Returns the port the server binds to.
    ///
    /// # Default
    ///
    /// `8080`
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// Returns the number of HTTP worker threads.
    ///
    /// # Default
    ///
    /// `4`
    pub fn workers() -> usize {
        env::var("HTTP_WORKERS")
            .unwrap_or_else(|_| "4".to_string())
            .parse()
            .unwrap_or(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_defaults() {
        // Only checked when the variables are absent from the environment,
        // which is the case for the test runner.
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }
        if env::var("HTTP_WORKERS").is_err() {
            assert_eq!(ServerConfig::workers(), 4);
        }
    }
}
