//! Error raised by every operation that talks to the settings service.

use thiserror::Error;

/// Boxed cause of a transport or decoding failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A call to the settings service failed.
///
/// This is the only recoverable error of the remote operations.  Callers
/// receive it unchanged: the store never retries, and its cached value is left
/// as it was before the failed call.
#[derive(Debug, Error)]
pub enum RemoteFetchError {
    /// The request never produced a response (connection refused, DNS
    /// failure, timeout imposed by the transport).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The service answered with a non-success status.
    ///
    /// `detail` holds the service's own explanation when the body was its
    /// `{"detail": ...}` error shape.
    #[error("{url} returned HTTP {status}{}", detail_suffix(.detail))]
    Status {
        url: String,
        status: u16,
        detail: Option<String>,
    },

    /// The service answered with success but the body could not be decoded.
    #[error("invalid response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: BoxError,
    },
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl RemoteFetchError {
    /// Returns the URL of the failed request.
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => {
                url
            }
        }
    }

    /// Returns the HTTP status for [`RemoteFetchError::Status`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
