//! Application layer for the settings client.
//!
//! # What use cases does the client have?
//!
//! - **`backup_path_store`** – The cached backup destination path: read it,
//!   override it locally, refresh it from the settings service, or ask the
//!   service to run its folder picker.  The remote side is reached through the
//!   [`SettingsService`](backup_path_store::SettingsService) trait, injected at
//!   construction time.
//!
//! - **`backup_history`** – Read-only listing of past backups, converted into
//!   the domain [`BackupRecord`](amber_core::BackupRecord) shape.
//!
//! - **`error`** – [`RemoteFetchError`](error::RemoteFetchError), shared by
//!   every remote operation.

pub mod backup_history;
pub mod backup_path_store;
pub mod error;
