//! Configuration options for the Lagos Property Map client

use std::time::Duration;

/// Environment variable holding the remote API base URL
pub const API_URL_ENV: &str = "PROPERTY_MAP_API_URL";

/// Configuration options for the Lagos Property Map client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Fixed bound applied to every outbound request. The same bound covers
    /// every resource; there is no per-operation override.
    pub request_timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(5),
        }
    }
}

impl ClientOptions {
    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Duration) -> Self {
        self.request_timeout = value;
        self
    }
}
