//! Backend location.
//!
//! The base URL is derived from a hostname plus the fixed backend port, the
//! same way the original deployment exposed it; an explicit base URL can
//! override the derivation.

/// Fixed port the backend listens on.
pub const BACKEND_PORT: u16 = 30081;

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    /// Derive the base URL from a hostname and the fixed backend port.
    #[must_use]
    pub fn from_host(host: &str) -> Self {
        Self { base_url: format!("http://{host}:{BACKEND_PORT}") }
    }

    /// Use an explicit base URL as-is.
    #[must_use]
    pub fn from_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Join an endpoint path onto the base URL, tolerating a trailing slash.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
