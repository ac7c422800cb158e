//! Runtime configuration for the settings client.
//!
//! [`ClientConfig`] is built once at startup from the configuration file,
//! environment, and CLI flags, then handed to the HTTP adapter.

use std::time::Duration;

/// Base URL of the AmberDay backend in a local development setup.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Everything the HTTP adapter needs to reach the settings service.
///
/// # Example
///
/// ```rust
/// use amber_settings::domain::ClientConfig;
///
/// let cfg = ClientConfig::default();
/// assert_eq!(cfg.base_url, "http://localhost:8000");
/// assert!(cfg.request_timeout.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host, port, and optional path prefix of the backend.
    pub base_url: String,

    /// Upper bound on a whole request, if any.
    ///
    /// `None` waits indefinitely, which suits the interactive selection: the
    /// service does not answer until the user closes the folder picker.
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: None,
        }
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
