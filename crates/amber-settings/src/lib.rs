//! amber-settings library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does amber-settings do? (for beginners)
//!
//! The AmberDay backend can copy tracked documents to a *backup destination*
//! chosen by the user.  Which folder that is lives on the backend; the client
//! only keeps a cached copy so the UI can show it without asking every time.
//!
//! This crate:
//!
//! 1. Holds the cached backup path in a [`BackupPathStore`], a single
//!    observable cell that UI code can read or subscribe to.
//! 2. Refreshes the cache from the settings service (`load_backup_path`) or
//!    asks the service to open its folder picker and persist the user's choice
//!    (`select_backup_path`).
//! 3. Lists backup history for display (read-only).
//! 4. Ships a small `amber-settings` command-line tool built on the same code.
//!
//! [`BackupPathStore`]: application::backup_path_store::BackupPathStore

/// Domain layer: client configuration values.
pub mod domain;

/// Application layer: the backup-path store, backup history, and the ports
/// they depend on.
pub mod application;

/// Infrastructure layer: HTTP adapter, configuration file, and UI bridge.
pub mod infrastructure;
