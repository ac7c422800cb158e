//! Command bridge between the settings client and a UI shell.
//!
//! A desktop shell (a WebView host, for instance) calls these functions in
//! response to UI actions and serializes the result to JSON for the frontend.
//!
//! ```text
//! UI (TypeScript)                 shell IPC            Rust
//! ─────────────────────────────────────────────────────────────────────
//! invoke("load_backup_path")  ───────────────────>  load_backup_path()
//!                             <───────────────────  CommandResult<BackupPathDto>
//! ```
//!
//! # `CommandResult<T>`
//!
//! All commands return the same envelope:
//! ```json
//! { "success": true,  "data": {...}, "error": null  }
//! { "success": false, "data": null,  "error": "..."  }
//! ```
//! so the frontend can handle every command's failure the same way.  Remote
//! failures become `success: false`; the store's cached path is untouched in
//! that case, so the UI can keep showing the previous value.
//!
//! # Reactivity
//!
//! Commands return snapshots.  A shell that wants push updates subscribes to
//! [`BackupPathStore::subscribe`] and forwards each change as an event.

use std::sync::Arc;

use amber_core::BackupRecord;
use serde::{Deserialize, Serialize};

use crate::application::backup_history::BackupHistory;
use crate::application::backup_path_store::BackupPathStore;

// ── DTOs ──────────────────────────────────────────────────────────────────────

/// Snapshot of the cached backup path sent to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupPathDto {
    pub backup_path: String,
    /// `false` when the path is empty.
    pub configured: bool,
}

impl BackupPathDto {
    fn from_path(backup_path: String) -> Self {
        Self {
            configured: !backup_path.is_empty(),
            backup_path,
        }
    }
}

/// Unified response wrapper for bridge commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResult<T: Serialize> {
    /// `true` if the command completed successfully; `false` on error.
    pub success: bool,
    /// The command's return value, present only when `success` is `true`.
    pub data: Option<T>,
    /// A human-readable error message, present only when `success` is `false`.
    pub error: Option<String>,
}

impl<T: Serialize> CommandResult<T> {
    /// Constructs a successful result containing `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Constructs an error result containing the given message.
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

impl<T: Serialize, E: std::fmt::Display> From<Result<T, E>> for CommandResult<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::err(e.to_string()),
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

/// Returns the cached backup path without contacting the service.
pub fn get_backup_path(store: &BackupPathStore) -> CommandResult<BackupPathDto> {
    CommandResult::ok(BackupPathDto::from_path(store.backup_path()))
}

/// Overrides the cached backup path locally.
///
/// The value is not sent to the service; the next load replaces it.
pub fn set_backup_path(store: &BackupPathStore, path: String) -> CommandResult<BackupPathDto> {
    store.set_backup_path(path);
    get_backup_path(store)
}

/// Refreshes the cached path from the service.
pub async fn load_backup_path(store: Arc<BackupPathStore>) -> CommandResult<BackupPathDto> {
    store
        .load_backup_path()
        .await
        .map(BackupPathDto::from_path)
        .into()
}

/// Runs the service-side folder picker and caches the result.
pub async fn select_backup_path(store: Arc<BackupPathStore>) -> CommandResult<BackupPathDto> {
    store
        .select_backup_path()
        .await
        .map(BackupPathDto::from_path)
        .into()
}

/// Lists backup history, optionally restricted to one anchor.
pub async fn list_backups(
    history: Arc<BackupHistory>,
    anchor_id: Option<i64>,
) -> CommandResult<Vec<BackupRecord>> {
    let result = match anchor_id {
        Some(id) => history.for_anchor(id).await,
        None => history.all().await,
    };
    result.into()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
