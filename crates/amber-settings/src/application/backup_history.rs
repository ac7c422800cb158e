//! BackupHistory: read-only view of the backups the service has recorded.
//!
//! The backup engine runs on the service side; the client only lists what it
//! produced so the UI can show when and where each anchor was copied.

use std::sync::Arc;

use amber_core::{BackupRecord, BackupRecordResponse};
use async_trait::async_trait;
use tracing::debug;

use crate::application::error::RemoteFetchError;

/// Source of backup history records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackupHistorySource: Send + Sync {
    /// Every backup record, newest first.
    async fn list_backups(&self) -> Result<Vec<BackupRecordResponse>, RemoteFetchError>;

    /// Backup records of a single anchor, newest first.
    async fn list_backups_for_anchor(
        &self,
        anchor_id: i64,
    ) -> Result<Vec<BackupRecordResponse>, RemoteFetchError>;
}

/// Lists backup history and converts it into domain records.
pub struct BackupHistory {
    source: Arc<dyn BackupHistorySource>,
}

impl BackupHistory {
    pub fn new(source: Arc<dyn BackupHistorySource>) -> Self {
        Self { source }
    }

    /// Returns every backup record in the order the service sent them.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteFetchError`] if the request fails.
    pub async fn all(&self) -> Result<Vec<BackupRecord>, RemoteFetchError> {
        let records = self.source.list_backups().await?;
        debug!(count = records.len(), "backup history loaded");
        Ok(records.into_iter().map(BackupRecord::from).collect())
    }

    /// Returns the backup records of `anchor_id`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteFetchError`] if the request fails.
    pub async fn for_anchor(&self, anchor_id: i64) -> Result<Vec<BackupRecord>, RemoteFetchError> {
        let records = self.source.list_backups_for_anchor(anchor_id).await?;
        debug!(anchor_id, count = records.len(), "anchor backup history loaded");
        Ok(records.into_iter().map(BackupRecord::from).collect())
    }
}
