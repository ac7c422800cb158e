//! HTTP adapter for the AmberDay settings service.
//!
//! Implements [`SettingsService`] and [`BackupHistorySource`] on top of a
//! shared `reqwest::Client`.
//!
//! # Error mapping
//!
//! | What happened                              | Error                             |
//! |--------------------------------------------|-----------------------------------|
//! | No response (refused, DNS, timeout)        | [`RemoteFetchError::Transport`]   |
//! | Response with a non-2xx status             | [`RemoteFetchError::Status`]      |
//! | 2xx response whose body is not the schema  | [`RemoteFetchError::Decode`]      |
//!
//! For status errors the body is read once more to pick up the service's
//! `{"detail": ...}` explanation; a body that is not that shape is ignored.

use amber_core::protocol::routes;
use amber_core::{BackupPathResponse, BackupRecordResponse, ErrorDetail};
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::application::backup_history::BackupHistorySource;
use crate::application::backup_path_store::SettingsService;
use crate::application::error::RemoteFetchError;
use crate::domain::ClientConfig;

/// Settings service client speaking JSON over HTTP.
///
/// Cloning is cheap: the underlying `reqwest::Client` shares its connection
/// pool between clones.
#[derive(Debug, Clone)]
pub struct HttpSettingsService {
    client: Client,
    base_url: String,
}

impl HttpSettingsService {
    /// Builds the client from `config`.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the TLS backend or resolver cannot be
    /// initialised.
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        routes::join(&self.base_url, path)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<T, RemoteFetchError> {
        let url = self.url(path);
        debug!(%method, %url, "settings service request");

        let response = self
            .client
            .request(method, &url)
            .send()
            .await
            .map_err(|e| {
                warn!(%url, "settings service unreachable: {e}");
                RemoteFetchError::Transport {
                    url: url.clone(),
                    source: Box::new(e),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body only loses the detail text.
            let body = response.text().await.unwrap_or_default();
            let detail = ErrorDetail::message_from_body(&body);
            warn!(%url, status = status.as_u16(), detail = ?detail, "settings service rejected request");
            return Err(RemoteFetchError::Status {
                url,
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RemoteFetchError::Decode {
                url,
                source: Box::new(e),
            })
    }
}

#[async_trait]
impl SettingsService for HttpSettingsService {
    async fn fetch_backup_path(&self) -> Result<BackupPathResponse, RemoteFetchError> {
        self.send_json(Method::GET, routes::BACKUP_PATH).await
    }

    async fn select_backup_path(&self) -> Result<BackupPathResponse, RemoteFetchError> {
        self.send_json(Method::POST, routes::BACKUP_PATH_SELECT).await
    }
}

#[async_trait]
impl BackupHistorySource for HttpSettingsService {
    async fn list_backups(&self) -> Result<Vec<BackupRecordResponse>, RemoteFetchError> {
        self.send_json(Method::GET, routes::BACKUPS).await
    }

    async fn list_backups_for_anchor(
        &self,
        anchor_id: i64,
    ) -> Result<Vec<BackupRecordResponse>, RemoteFetchError> {
        self.send_json(Method::GET, &routes::backups_for_anchor(anchor_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_url_joins_base_and_route() {
        let svc = HttpSettingsService::new(&ClientConfig::new("http://127.0.0.1:8000/")).unwrap();
        assert_eq!(
            svc.url(routes::BACKUP_PATH),
            "http://127.0.0.1:8000/settings/backup/path"
        );
    }

    #[test]
    fn test_new_accepts_request_timeout() {
        let cfg = ClientConfig::default().with_request_timeout(Some(Duration::from_secs(5)));
        let svc = HttpSettingsService::new(&cfg).unwrap();
        assert_eq!(svc.base_url(), "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        // Arrange: bind then release a port so nothing is listening on it.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let base = format!("http://127.0.0.1:{port}");
        let cfg = ClientConfig::new(base.clone())
            .with_request_timeout(Some(Duration::from_secs(2)));
        let svc = HttpSettingsService::new(&cfg).unwrap();

        // Act
        let err = svc.fetch_backup_path().await.unwrap_err();

        // Assert
        assert!(matches!(err, RemoteFetchError::Transport { .. }), "got {err:?}");
        assert_eq!(err.url(), format!("{base}/settings/backup/path"));
    }
}
