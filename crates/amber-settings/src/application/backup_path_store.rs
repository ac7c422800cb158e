//! BackupPathStore: the client's cached copy of the backup destination path.
//!
//! The settings service is the authority on where backups go.  The store keeps
//! the most recently observed value in memory so UI code can read it at any
//! time, and exposes it through a [`tokio::sync::watch`] channel so observers
//! see every change without polling.
//!
//! # Transitions
//!
//! ```text
//!                set_backup_path(p)             (local, synchronous)
//!               ┌──────────────────┐
//!               ▼                  │
//!   "" ──────► cached ─────────────┤
//!               ▲                  │
//!               └──────────────────┘
//!    load_backup_path() / select_backup_path()   (remote, async)
//!        Ok(resp)  -> cached = resp path ("" when absent)
//!        Err(e)    -> cached unchanged, e returned to the caller
//! ```
//!
//! # Overlapping calls
//!
//! Remote calls are not sequenced, coalesced, or cancelled.  When two of them
//! are in flight, each writes its response when it arrives, so the cache ends
//! up holding whichever response arrived *last*, not the one requested last.
//! There is also no timeout here; the transport decides how long to wait.

use std::sync::Arc;

use amber_core::{BackupPathResponse, BackupPathSetting};
use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::application::error::RemoteFetchError;

/// The remote side of the backup-path setting.
///
/// The infrastructure implementation speaks HTTP; tests inject doubles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsService: Send + Sync {
    /// Reads the currently persisted backup path.
    async fn fetch_backup_path(&self) -> Result<BackupPathResponse, RemoteFetchError>;

    /// Runs the service-side folder picker and persists the user's choice.
    ///
    /// An empty path in the response means the user cancelled.
    async fn select_backup_path(&self) -> Result<BackupPathResponse, RemoteFetchError>;
}

/// Single source of truth for the backup destination path within the client.
///
/// Construct one per application session and share it behind an `Arc`.
pub struct BackupPathStore {
    service: Arc<dyn SettingsService>,
    path: watch::Sender<String>,
}

impl BackupPathStore {
    /// Creates a store whose cached path starts out empty.
    pub fn new(service: Arc<dyn SettingsService>) -> Self {
        let (path, _) = watch::channel(String::new());
        Self { service, path }
    }

    /// Returns the cached path.
    pub fn backup_path(&self) -> String {
        self.path.borrow().clone()
    }

    /// Returns the cached path as a domain setting.
    pub fn setting(&self) -> BackupPathSetting {
        BackupPathSetting::new(self.backup_path())
    }

    /// Returns a receiver that observes every change to the cached path.
    ///
    /// The receiver starts with the current value marked as seen.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.path.subscribe()
    }

    /// Overwrites the cached path immediately.  No remote call is made.
    pub fn set_backup_path(&self, path: impl Into<String>) {
        let path = path.into();
        debug!(path = %path, "backup path set locally");
        self.path.send_replace(path);
    }

    /// Refreshes the cache from the settings service and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteFetchError`] if the request fails; the cache is left
    /// unchanged in that case.
    pub async fn load_backup_path(&self) -> Result<String, RemoteFetchError> {
        let resp = self.service.fetch_backup_path().await.map_err(|e| {
            warn!("loading backup path failed: {e}");
            e
        })?;
        Ok(self.apply("load", resp.into_path()))
    }

    /// Asks the settings service to let the user pick a new destination,
    /// caches the outcome, and returns it.
    ///
    /// A cancelled selection comes back as an empty path and clears the cache.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteFetchError`] if the request fails; the cache is left
    /// unchanged in that case.
    pub async fn select_backup_path(&self) -> Result<String, RemoteFetchError> {
        let resp = self.service.select_backup_path().await.map_err(|e| {
            warn!("selecting backup path failed: {e}");
            e
        })?;
        Ok(self.apply("select", resp.into_path()))
    }

    fn apply(&self, origin: &'static str, path: String) -> String {
        info!(origin, path = %path, "backup path updated from settings service");
        self.path.send_replace(path.clone());
        path
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
