//! JSON bodies exchanged with the settings service.
//!
//! Field names follow the backend's snake_case convention, unlike the domain
//! types, which use the UI's camelCase.  Conversions into domain types live
//! here so the mapping is written once.

use serde::{Deserialize, Serialize};

use crate::domain::backup::{file_name_of, BackupRecord};

// ── Settings ──────────────────────────────────────────────────────────────────

/// Body of `GET /settings/backup/path` and `POST /settings/backup/path/select`.
///
/// The service normally sends `{"backup_path": "..."}`.  A missing field or an
/// explicit `null` both mean "nothing configured" and read as an empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupPathResponse {
    #[serde(default)]
    pub backup_path: Option<String>,
}

impl BackupPathResponse {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            backup_path: Some(path.into()),
        }
    }

    /// Consumes the response and returns the path, empty when absent.
    pub fn into_path(self) -> String {
        self.backup_path.unwrap_or_default()
    }
}

// ── Backups ───────────────────────────────────────────────────────────────────

/// One entry of `GET /backups/` and `GET /backups/by-anchor/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupRecordResponse {
    pub id: i64,
    pub file_anchor_id: i64,
    pub file_anchor_name: String,
    pub file_anchor_path: String,
    pub backup_path: String,
    /// The service sends `""` when the record has no timestamp.
    #[serde(default)]
    pub backup_time: String,
}

impl From<BackupRecordResponse> for BackupRecord {
    fn from(rec: BackupRecordResponse) -> Self {
        let file_name = file_name_of(&rec.backup_path).to_string();
        if file_name.is_empty() {
            tracing::debug!(
                backup_id = rec.id,
                backup_path = %rec.backup_path,
                "backup record path has no file component"
            );
        }
        Self {
            id: rec.id,
            file_anchor_id: rec.file_anchor_id,
            file_anchor_name: rec.file_anchor_name,
            file_anchor_path: rec.file_anchor_path,
            backup_path: rec.backup_path,
            backup_time: rec.backup_time,
            file_name,
        }
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// Error body of a non-success response: `{"detail": ...}`.
///
/// `detail` is usually a human-readable string, but request-validation
/// failures send a list of objects instead, so it is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorDetail {
    pub detail: serde_json::Value,
}

impl ErrorDetail {
    /// Extracts the detail message from an error body.
    ///
    /// Returns `None` when the body is not the service's error shape (e.g. an
    /// HTML page from a proxy).
    pub fn message_from_body(body: &str) -> Option<String> {
        let parsed: ErrorDetail = serde_json::from_str(body).ok()?;
        match parsed.detail {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
