//! Backup destination setting and backup history records.

use serde::{Deserialize, Serialize};

/// The backup destination path cached by the client.
///
/// The string is opaque: it may be empty (nothing configured yet, or the user
/// cancelled the picker) and is never checked against the filesystem here.
/// Existence and permissions are the settings service's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupPathSetting {
    pub path: String,
}

impl BackupPathSetting {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Returns `true` when a non-empty destination is set.
    pub fn is_configured(&self) -> bool {
        !self.path.is_empty()
    }
}

/// A historical snapshot of one anchor's backed-up file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupRecord {
    pub id: i64,
    pub file_anchor_id: i64,
    pub file_anchor_name: String,
    pub file_anchor_path: String,
    /// Full path of the backup copy.
    pub backup_path: String,
    /// ISO-8601 timestamp, or empty when the service did not record one.
    pub backup_time: String,
    /// Last component of `backup_path`.
    pub file_name: String,
}

/// Returns the last component of `path`, accepting both `/` and `\` separators.
///
/// Backups written by a Windows service use backslashes, and the client may
/// run on another platform, so `std::path::Path` cannot be relied on here.
/// Returns an empty string when `path` ends in a separator.
pub fn file_name_of(path: &str) -> &str {
    path.rsplit(|c| c == '/' || c == '\\').next().unwrap_or("")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
